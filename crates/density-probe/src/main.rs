fn main() {
    #[cfg(not(any(target_arch = "wasm32", target_os = "android")))]
    density_probe::run_native();
}
