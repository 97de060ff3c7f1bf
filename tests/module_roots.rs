use std::path::Path;

#[test]
fn models_use_a_mod_rs_root() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    assert!(src.join("models/mod.rs").exists());
    assert!(
        !src.join("models.rs").exists(),
        "src/models.rs shadows src/models/mod.rs; keep a single module root",
    );
}

#[test]
fn query_uses_a_mod_rs_root() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    assert!(src.join("query/mod.rs").exists());
    assert!(
        !src.join("query.rs").exists(),
        "src/query.rs shadows src/query/mod.rs; keep a single module root",
    );
}
