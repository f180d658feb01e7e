use chrono::Datelike;

fn main() {
    // The footer copyright line shows the year the site was built
    println!("cargo:rustc-env=BUILD_YEAR={}", chrono::Utc::now().year());

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}
