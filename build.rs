fn main() {
    // tauri-app 特性启用时才运行 Tauri 构建脚本（需要 tauri.conf.json 与前端资源）
    if std::env::var_os("CARGO_FEATURE_TAURI_APP").is_some() {
        tauri_build::build();
    }
}
