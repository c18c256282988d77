#[cfg(feature = "plugin")]
const COMMANDS: &[&str] = &["share_url", "share_file", "call"];

fn main() {
    println!("cargo:rustc-check-cfg=cfg(mobile)");
    println!("cargo:rustc-check-cfg=cfg(desktop)");

    #[cfg(feature = "plugin")]
    tauri_plugin::Builder::new(COMMANDS)
        .android_path("android")
        .ios_path("ios")
        .build();
}
