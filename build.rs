fn main() {
    if std::env::var_os("CARGO_FEATURE_LIBCEC").is_some() {
        pkg_config::Config::new()
            .probe("libcec")
            .expect("libcec not found, install libcec-dev or build without the libcec feature");
    }
}
