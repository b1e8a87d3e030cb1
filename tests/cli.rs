use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_help() {
    Command::cargo_bin("ytdigest")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("analyze"))
        .stdout(predicate::str::contains("platforms"));
}

#[test]
fn lists_platforms() {
    Command::cargo_bin("ytdigest")
        .unwrap()
        .args(["--quiet", "platforms"])
        .assert()
        .success()
        .stdout(predicate::str::contains("YouTube"))
        .stdout(predicate::str::contains("Local transcript files"));
}

#[test]
fn analyzes_local_transcript_file() {
    let dir = tempfile::tempdir().unwrap();
    let transcript = dir.path().join("talk.txt");
    fs_err::write(
        &transcript,
        "O gato correu muito rápido. O gato pulou alto também. Fim.",
    )
    .unwrap();

    Command::cargo_bin("ytdigest")
        .unwrap()
        .args(["--quiet", "analyze", "--no-metadata"])
        .arg(&transcript)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total words: 11"))
        .stdout(predicate::str::contains("Total sentences: 3"))
        .stdout(predicate::str::contains("gato: 2 times"))
        .stdout(predicate::str::contains(
            "O gato correu muito rápido. O gato pulou alto também.",
        ));
}

#[test]
fn analyze_requires_a_source() {
    Command::cargo_bin("ytdigest")
        .unwrap()
        .arg("analyze")
        .assert()
        .failure()
        .stderr(predicate::str::contains("URL_OR_FILE"));
}
