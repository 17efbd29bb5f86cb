fn main() {
    let x = 1u8;
    let y = {
        let x = 2u8;
        x * 3
    };
    println!("{}{}", x, y);
}
