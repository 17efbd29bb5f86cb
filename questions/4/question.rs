fn main() {
    let x: bool = unsafe { std::mem::transmute(2u8) };
    println!("{}", x);
}
