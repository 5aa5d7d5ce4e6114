//! Tests for command-line parsing and the build runner

#[cfg(test)]
mod tests {
    use brickwork::bond::layout::Bond;
    use brickwork::build::session::PlacementMode;
    use brickwork::io::cli::{BuildRunner, Cli};
    use brickwork::io::configuration::{
        DEFAULT_SEED, DEFAULT_STRIDE_HEIGHT, DEFAULT_STRIDE_WIDTH, DEFAULT_WALL_HEIGHT,
        DEFAULT_WALL_WIDTH,
    };
    use clap::Parser;
    use std::ffi::OsString;

    // Tests CLI parsing with no arguments uses the configured defaults
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_defaults() {
        let cli = Cli::parse_from(["brickwork"]);

        assert_eq!(cli.width, DEFAULT_WALL_WIDTH);
        assert_eq!(cli.height, DEFAULT_WALL_HEIGHT);
        assert_eq!(cli.bond, Bond::Stretcher);
        assert_eq!(cli.mode, PlacementMode::OptimalStrides);
        assert_eq!(cli.stride_width, DEFAULT_STRIDE_WIDTH);
        assert_eq!(cli.stride_height, DEFAULT_STRIDE_HEIGHT);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.steps, None);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by dropping the value enum on the bond argument
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "brickwork",
            "--width",
            "10",
            "--height",
            "4",
            "--bond",
            "wildverband",
            "--mode",
            "left-to-right",
            "--stride-width",
            "8",
            "--stride-height",
            "2",
            "--seed",
            "7",
            "--steps",
            "3",
            "--png",
            "out/wall.png",
            "--gif",
            "out/build.gif",
            "--json",
            "--trace",
            "--quiet",
        ]);

        assert_eq!(cli.bond, Bond::Wild);
        assert_eq!(cli.mode, PlacementMode::LeftToRight);
        assert_eq!(cli.steps, Some(3));
        assert!(cli.png.is_some() && cli.gif.is_some());
        assert!(cli.json && cli.trace && cli.quiet);

        let config = cli.session_config();
        assert_eq!((config.width, config.height), (10, 4));
        assert_eq!((config.stride_width, config.stride_height), (8, 2));
        assert_eq!(config.seed, 7);
    }

    // Tests unknown bonds are rejected at parse time
    // Verified by accepting arbitrary bond names
    #[test]
    fn test_cli_rejects_unknown_bond() {
        assert!(Cli::try_parse_from(["brickwork", "--bond", "header"]).is_err());
    }

    // Tests the runner honours the step limit
    // Verified by ignoring the step limit
    #[test]
    fn test_runner_step_limit() {
        let cli = Cli::parse_from([
            "brickwork", "--width", "6", "--height", "3", "--steps", "4", "--quiet",
        ]);

        let summary = BuildRunner::new(cli).run().expect("run succeeds");

        assert_eq!(summary.steps, 4);
        assert!(!summary.complete);
    }

    // Tests a full run writes both renders
    // Verified by skipping the GIF export
    #[test]
    fn test_runner_writes_outputs() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let png = temp_dir.path().join("wall.png");
        let gif = temp_dir.path().join("build.gif");
        let mut args: Vec<OsString> = ["brickwork", "--width", "8", "--height", "4"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.extend(["--bond", "flemish", "--quiet"].map(OsString::from));
        args.extend([
            OsString::from("--png"),
            png.clone().into_os_string(),
            OsString::from("--gif"),
            gif.clone().into_os_string(),
        ]);
        let cli = Cli::parse_from(args);

        let summary = BuildRunner::new(cli).run().expect("run succeeds");

        assert!(summary.complete);
        assert!(png.exists());
        assert!(gif.exists());
    }

    // Tests a stalled configuration surfaces as an error
    // Verified by treating stalls as completion
    #[test]
    fn test_runner_reports_stall() {
        let cli = Cli::parse_from(["brickwork", "--stride-width", "1", "--quiet"]);

        assert!(BuildRunner::new(cli).run().is_err());
    }
}
