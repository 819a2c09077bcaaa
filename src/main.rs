fn main() {
    if let Err(e) = upperr::get_args().and_then(upperr::run) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
