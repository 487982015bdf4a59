use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

const DEFINITIONS: &str = r#"resource "cloudflare_dns_record" "terraform_managed_resource_01" {
  content = "192.0.2.1"
  name    = "www.x.com"
  type    = "A"
}

resource "cloudflare_dns_record" "terraform_managed_resource_02" {
  content = "v=spf1 -all"
  name    = "x.com"
}
"#;

const IMPORTS: &str = "terraform import cloudflare_dns_record.terraform_managed_resource_01 zone/01
terraform import cloudflare_dns_record.terraform_managed_resource_02 zone/02
";

fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let tf = dir.join("cf.tf");
    let sh = dir.join("import.sh");
    fs::write(&tf, DEFINITIONS).unwrap();
    fs::write(&sh, IMPORTS).unwrap();
    (tf, sh)
}

fn canonizer(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cf-canonizer"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn assert_no_outputs(dir: &Path) {
    assert!(!dir.join("cf_canonized.tf").exists());
    assert!(!dir.join("import_canonized.sh").exists());
}

#[test]
fn one_argument_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let (tf, _) = write_inputs(dir.path());

    let out = canonizer(dir.path()).arg(&tf).output().unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));
    assert!(out.stdout.is_empty());
    assert_no_outputs(dir.path());
}

#[test]
fn three_arguments_is_a_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let (tf, sh) = write_inputs(dir.path());

    let out = canonizer(dir.path()).arg(&tf).arg(&sh).arg("extra.sh").output().unwrap();

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_no_outputs(dir.path());
}

#[test]
fn default_outputs_land_in_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    let (tf, sh) = write_inputs(dir.path());

    let out = canonizer(dir.path()).arg(&tf).arg(&sh).output().unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(
        stdout,
        "Wrote canonized Terraform to cf_canonized.tf\nWrote canonized import script to import_canonized.sh\n"
    );
    assert!(dir.path().join("cf_canonized.tf").exists());
    assert!(dir.path().join("import_canonized.sh").exists());
}

#[test]
fn success_reports_both_output_paths() {
    let dir = tempfile::tempdir().unwrap();
    let (tf, sh) = write_inputs(dir.path());
    let out_tf = dir.path().join("out.tf");
    let out_sh = dir.path().join("out.sh");

    let out = canonizer(dir.path())
        .arg(&tf)
        .arg(&sh)
        .arg("--out-definition")
        .arg(&out_tf)
        .arg("--out-import")
        .arg(&out_sh)
        .output()
        .unwrap();

    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Wrote canonized Terraform to {}", out_tf.display()),
            format!("Wrote canonized import script to {}", out_sh.display()),
        ]
    );

    assert_eq!(
        fs::read_to_string(&out_sh).unwrap(),
        "terraform import cloudflare_dns_record.A_www_x_com zone/01\n\
         terraform import cloudflare_dns_record.terraform_managed_resource_02 zone/02\n"
    );
    assert_no_outputs(dir.path());
}

#[test]
fn missing_input_fails_without_writing() {
    let dir = tempfile::tempdir().unwrap();

    let out = canonizer(dir.path()).arg("absent.tf").arg("absent.sh").output().unwrap();

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("absent.tf"));
    assert_no_outputs(dir.path());
}

fn run_with_log(dir: &Path, rust_log: Option<&str>) -> Output {
    let (tf, sh) = write_inputs(dir);
    let mut cmd = canonizer(dir);
    if let Some(filter) = rust_log {
        cmd.env("RUST_LOG", filter);
    }
    cmd.arg(&tf).arg(&sh).output().unwrap()
}

#[test]
fn plain_rust_log_level_enables_debug_events() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_with_log(dir.path(), Some("debug"));

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("dropping unkeyable block"));
    assert!(stderr.contains("wrote output"));
}

#[test]
fn logging_defaults_to_warn() {
    let dir = tempfile::tempdir().unwrap();
    let out = run_with_log(dir.path(), None);

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(!stderr.contains("dropping unkeyable block"));
    assert!(!stderr.contains("wrote output"));
}
