struct D(u8);

impl Drop for D {
    fn drop(&mut self) {
        print!("{}", self.0);
    }
}

fn main() {
    let _a = D(1);
    let _ = D(2);
    let _b = D(3);
}
