use super::*;

#[test]
fn test_data_dir_layout() {
    // 环境变量是进程级的，相关断言都放在这一个测试里
    let tmp = tempfile::tempdir().unwrap();
    std::env::set_var(DATA_DIR_ENV, tmp.path());

    assert_eq!(get_app_data_dir().as_deref(), Some(tmp.path()));
    assert_eq!(get_log_dir(), Some(tmp.path().join(LOG_DIR)));
    assert_eq!(get_export_dir(), Some(tmp.path().join(EXPORT_DIR)));
    assert_eq!(get_document_path(), Some(tmp.path().join(DOCUMENT_FILE)));

    let log_dir = ensure_log_dir().unwrap();
    assert!(log_dir.is_dir());
    let export_dir = ensure_export_dir().unwrap();
    assert!(export_dir.is_dir());
    // 已存在时直接返回
    assert_eq!(ensure_export_dir().unwrap(), export_dir);

    std::env::set_var(DATA_DIR_ENV, "");
    if let Some(dir) = get_app_data_dir() {
        assert!(dir.to_string_lossy().contains(APP_NAME));
    }
    std::env::remove_var(DATA_DIR_ENV);
}

#[test]
fn test_ensure_dir_without_location() {
    let err = ensure_dir(None, "log").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    assert!(err.to_string().contains("log"));
}
