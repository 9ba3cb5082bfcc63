fn main() {
    if let Err(e) = headspace_rs::adapters::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
