mod cli {
    #![allow(non_snake_case)]

    use assert_cmd::Command;
    use predicates::prelude::*;
    use predicates::str::contains;

    use std::io::Write;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    const NAME: &str = "adinsight";

    const REPORT: &str = "Duration: Sept 15 to Nov 26
Winning Ads:
VS 20
IG Reel - Can Reiki Really Cure Illness?
Underperforming Ads:
VS 44 - Money Attraction
";

    fn report_file(content: &str) -> Result<tempfile::NamedTempFile, std::io::Error> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(content.as_bytes())?;
        Ok(file)
    }

    #[test]
    fn test_output__text_dashboard_from_stdin() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.write_stdin(REPORT);

        cmd.assert()
            .success()
            .stdout(contains("Ad Report Analysis: stdin"))
            .stdout(contains("Date range: Sept 15 to Nov 26"))
            .stdout(contains("Win rate: 67%"))
            .stdout(contains("- Health/Healing: +1"))
            .stdout(contains("- Money/Wealth: -0.5"))
            .stdout(contains(
                "Insight: Health/Healing is your top-performing theme.",
            ));
        Ok(())
    }

    #[test]
    fn test_output__when_only_losing_ads_match_a_theme() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.args(["--topic", "Reiki", "--expand", "1"])
            .write_stdin("Winning Ads:\nVS 1\nUnderperforming Ads:\nVS 2 - Money Attraction");

        cmd.assert()
            .success()
            .stdout(contains("Underperforming themes:\n- Money/Wealth: -0.5"))
            .stdout(contains("Winning themes:").not())
            .stdout(contains("top-performing theme").not())
            .stdout(contains("- Winning Themes from data: \n"));
        Ok(())
    }

    #[test]
    fn test_output__report_file_with_byte_order_mark() -> TestResult {
        let file = report_file("\u{FEFF}Winning Ads:\n\u{FEFF}VS 2\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--format").arg("json").arg(file.path());

        let output = cmd.output()?;
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value[0]["data"]["stats"]["totalWinning"], 1);
        assert_eq!(value[0]["data"]["winningAds"][0], "VS 2");
        Ok(())
    }

    #[test]
    fn test_output__json_from_file() -> TestResult {
        let file = report_file(REPORT)?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--format").arg("json").arg(file.path());

        let output = cmd.output()?;
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        let data = &value[0]["data"];
        assert_eq!(data["stats"]["totalWinning"], 2);
        assert_eq!(data["stats"]["totalLosing"], 1);
        assert_eq!(data["stats"]["winRate"], 67);
        assert_eq!(data["losingAds"][0], "VS 44 - Money Attraction");
        assert_eq!(data["audiences"].as_array().map(Vec::len), Some(4));
        Ok(())
    }

    #[test]
    fn test_output__multiple_files_keep_order() -> TestResult {
        let first = report_file("Winning Ads:\nVS 1")?;
        let second = report_file("Losing Ads:\nPC 2")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.args(["--format", "json", "--workers", "2"])
            .arg(first.path())
            .arg(second.path());

        let output = cmd.output()?;
        assert!(output.status.success());
        let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
        assert_eq!(value[0]["data"]["stats"]["winRate"], 100);
        assert_eq!(value[1]["data"]["stats"]["winRate"], 0);
        assert_eq!(value[1]["data"]["stats"]["totalLosing"], 1);
        Ok(())
    }

    #[test]
    fn test_output__when_report_is_blank() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.write_stdin("   \n\n");

        cmd.assert().failure().stderr(contains("is empty"));
        Ok(())
    }

    #[test]
    fn test_output__when_file_is_missing() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("/no/such/report.txt");

        cmd.assert()
            .failure()
            .stderr(contains("Failed to read report"));
        Ok(())
    }

    #[test]
    fn test_output__script_concepts_and_prompt() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.args(["--topic", "Reiki", "--expand", "2", "--language", "hindi"])
            .write_stdin(REPORT);

        cmd.assert()
            .success()
            .stdout(contains("Script concepts for \"Reiki\""))
            .stdout(contains("2. Science Behind Reiki [IG Reel (20s)]"))
            .stdout(contains("--- Full script prompt (Hindi) ---"))
            .stdout(contains("Devanagari"));
        Ok(())
    }

    #[test]
    fn test_output__expand_without_topic() -> TestResult {
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.args(["--expand", "1"]).write_stdin(REPORT);

        cmd.assert()
            .failure()
            .stderr(contains("--expand requires --topic"));
        Ok(())
    }

    #[test]
    fn test_output__custom_theme_file() -> TestResult {
        let themes = report_file("# custom\nReiki = reiki\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--themes").arg(themes.path()).write_stdin(REPORT);

        cmd.assert()
            .success()
            .stdout(contains("- Reiki: +1"))
            .stdout(contains("Health/Healing").not());
        Ok(())
    }

    #[test]
    fn test_output__invalid_theme_file() -> TestResult {
        let themes = report_file("Broken = (\n")?;
        let mut cmd = Command::cargo_bin(NAME)?;

        cmd.arg("--themes").arg(themes.path()).write_stdin(REPORT);

        cmd.assert()
            .failure()
            .stderr(contains("Invalid theme at line 1"));
        Ok(())
    }

    #[test]
    fn test_init__writes_theme_file_once() -> TestResult {
        let dir = tempfile::tempdir()?;

        Command::cargo_bin(NAME)?
            .arg("--init")
            .current_dir(dir.path())
            .assert()
            .success()
            .stdout(contains("Created theme_patterns.txt"));

        let written = std::fs::read_to_string(dir.path().join("theme_patterns.txt"))?;
        assert!(written.contains("Family/Parenting = "));

        Command::cargo_bin(NAME)?
            .arg("--init")
            .current_dir(dir.path())
            .assert()
            .failure()
            .stderr(contains("already exists"));
        Ok(())
    }
}
