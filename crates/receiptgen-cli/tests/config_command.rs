use assert_cmd::Command;
use predicates::prelude::*;
use receiptgen_testing::TestWorld;

#[test]
fn show_prints_defaults_when_no_file_exists() {
    let world = TestWorld::new();

    let result = world.run(&["config", "show"]).unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    assert!(
        result
            .stdout()
            .contains("endpoint = \"https://your-php-server.com/generate.php\"")
    );
    assert!(result.stdout().contains("request_timeout_secs = 30"));
}

#[test]
fn show_applies_endpoint_override() {
    let world = TestWorld::new().with_config("endpoint = \"https://file.example/generate.php\"\n");

    let result = world
        .run(&[
            "--format",
            "json",
            "--endpoint",
            "https://flag.example/generate.php",
            "config",
            "show",
        ])
        .unwrap();

    assert!(result.success(), "stderr: {}", result.stderr());
    let value = result.json().unwrap();
    assert_eq!(value["endpoint"], "https://flag.example/generate.php");
    assert_eq!(value["request_timeout_secs"], 30);
}

#[test]
fn init_writes_file_and_refuses_to_overwrite() {
    let world = TestWorld::new();

    let first = world.run(&["config", "init"]).unwrap();
    assert!(first.success(), "stderr: {}", first.stderr());
    assert!(world.config_path().exists());

    let second = world.run(&["config", "init"]).unwrap();
    assert!(!second.success());
    assert!(second.stderr().contains("already exists"));

    let forced = world.run(&["config", "init", "--force"]).unwrap();
    assert!(forced.success());
}

#[test]
fn invalid_config_is_reported() {
    let world = TestWorld::new().with_config("request_timeout_secs = 0\n");

    let result = world.run(&["config", "show"]).unwrap();

    assert!(!result.success());
    assert!(result.stderr().starts_with("Error:"));
}

#[test]
#[allow(deprecated)]
fn explicit_config_flag_wins() {
    let world = TestWorld::new();
    let custom = world.temp_dir().join("custom.toml");
    std::fs::write(&custom, "endpoint = \"https://custom.example/generate.php\"\n").unwrap();

    let mut cmd = Command::cargo_bin("receiptgen").unwrap();
    world.configure_command(&mut cmd);
    cmd.args(["--config", custom.to_str().unwrap(), "config", "show"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("https://custom.example/generate.php"));
}

#[test]
#[allow(deprecated)]
fn form_requires_a_terminal() {
    let world = TestWorld::new();

    let mut cmd = Command::cargo_bin("receiptgen").unwrap();
    world.configure_command(&mut cmd);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("needs a terminal"));
}
