use assert_cmd::Command;

pub fn blogctl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("blogctl").unwrap();
    cmd.env_remove("BLOGCTL_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}
