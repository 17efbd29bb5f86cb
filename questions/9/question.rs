fn main() {
    let a: u8 = 200;
    let b = a.wrapping_add(100);
    let c = a.checked_add(100).is_none();
    println!("{} {}", b, c);
}
