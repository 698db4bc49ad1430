fn main() {
    if let Err(err) = log_timeline::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
