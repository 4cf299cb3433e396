fn main() {
    // Stamp the build date for the footer build tag
    let build_date = chrono::Utc::now().format("%Y-%m-%d").to_string();
    println!("cargo:rustc-env=BUILD_DATE={build_date}");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
