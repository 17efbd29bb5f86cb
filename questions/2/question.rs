fn main() {
    let s = String::from("crab");
    let t = s;
    println!("{}{}", s, t);
}
