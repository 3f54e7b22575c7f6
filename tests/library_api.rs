mod common;

use adcraft::{
    AppError, CampaignInput, Framework, GenerateOptions, GenerationError, Platform, export_entry,
    generate, history_clear, history_delete, history_list, history_show,
};
use common::{EnvVarGuard, MODEL_PATH, TestContext, candidate_body, variations_json};
use serial_test::serial;

fn isolated(ctx: &TestContext) -> (EnvVarGuard, EnvVarGuard) {
    (EnvVarGuard::set("HOME", ctx.home()), EnvVarGuard::set("GEMINI_API_KEY", "test-key"))
}

fn options(product: &str) -> GenerateOptions {
    GenerateOptions { input: CampaignInput::new(product), export: None }
}

#[test]
#[serial]
fn missing_product_is_rejected_before_reading_credentials() {
    let ctx = TestContext::new();
    let _home = EnvVarGuard::set("HOME", ctx.home());
    let _key = EnvVarGuard::remove("GEMINI_API_KEY");

    let err = generate(options("   ")).unwrap_err();
    assert!(matches!(
        err,
        AppError::Generation(GenerationError::Validation(ref msg))
            if msg == "Please enter a product or service name."
    ));
}

#[test]
#[serial]
fn missing_credential_is_reported() {
    let ctx = TestContext::new();
    let _home = EnvVarGuard::set("HOME", ctx.home());
    let _key = EnvVarGuard::remove("GEMINI_API_KEY");

    let err = generate(options("EcoClean Spray")).unwrap_err();
    assert!(matches!(
        err,
        AppError::EnvironmentVariableMissing(ref name) if name == "GEMINI_API_KEY"
    ));
}

#[test]
#[serial]
fn public_api_lifecycle() {
    let ctx = TestContext::new();
    let _env = isolated(&ctx);
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", MODEL_PATH)
        .with_status(200)
        .with_body(candidate_body(&variations_json().to_string()))
        .expect(2)
        .create();
    ctx.write_gemini_config(&server.url());

    assert!(history_list().unwrap().is_empty());

    let mut first = options("EcoClean Spray");
    first.input.platform = Platform::Instagram;
    let first = generate(first).unwrap();
    let second = generate(options("Solar Lamp")).unwrap();
    mock.assert();

    assert_eq!(first.result.variations()[0].framework, Framework::Aida);
    let entries = history_list().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(Some(entries[0].id.as_str()), second.entry_id.as_deref());
    assert_eq!(Some(entries[1].id.as_str()), first.entry_id.as_deref());

    let first_id = first.entry_id.unwrap();
    let shown = history_show(&first_id).unwrap();
    assert_eq!(shown.input.platform, Platform::Instagram);
    assert_eq!(shown.result, first.result);

    let path = export_entry(&first_id, Some(ctx.work_dir())).unwrap();
    assert_eq!(path, ctx.work_dir().join("ad-copy-ecoclean-spray.txt"));
    let document = std::fs::read_to_string(&path).unwrap();
    assert!(document.contains("Platform: Instagram | Objective: Sales/Conversions"));

    assert!(history_delete(&first_id).unwrap());
    assert!(!history_delete(&first_id).unwrap());
    assert!(matches!(history_show(&first_id), Err(AppError::HistoryEntryNotFound(_))));

    assert_eq!(history_clear().unwrap(), 1);
    assert!(history_list().unwrap().is_empty());
}

#[test]
#[serial]
fn corrupt_history_file_loads_as_empty() {
    let ctx = TestContext::new();
    let _env = isolated(&ctx);
    std::fs::create_dir_all(ctx.config_dir()).unwrap();
    std::fs::write(ctx.config_dir().join("adcraft_history.json"), "{ not json").unwrap();

    assert!(history_list().unwrap().is_empty());
}
