pub async fn check() -> &'static str {
    "ok"
}

#[test]
fn check_reports_ok() {
    assert_eq!(tokio_test::block_on(check()), "ok");
}
