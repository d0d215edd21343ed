// Command line interface parsing
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use anyhow::Result;
use clap::{
    crate_description,
    crate_name,
    crate_version,
    Arg,
    ArgAction,
    ArgMatches,
    Command,
};
use crate::common::{
    ClientConfig,
    Credentials,
    Region,
    DEFAULT_REGION,
    resolve,
};
use tracing::{
    debug,
    Level,
};

// Ensures that the B2 region that we're passed is one we have an endpoint
// for.
fn is_valid_region(s: &str) -> Result<String, String> {
    match resolve(s) {
        Ok(_)  => Ok(s.into()),
        Err(e) => Err(e.to_string()),
    }
}

// Ensures that we were given a bucket name that isn't blank.
fn is_valid_bucket_name(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        return Err("All fields must be filled out, bucket name is blank".into());
    }

    Ok(s.into())
}

/// Create the clap `Command`
fn create_app() -> Command {
    debug!("Creating CLI app");

    Command::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::new("BUCKET")
                .value_name("BUCKET")
                .help("Bucket to report the size of")
                .required(true)
                .index(1)
                .value_parser(is_valid_bucket_name)
        )
        .arg(
            Arg::new("KEY_ID")
                .env("B2_APPLICATION_KEY_ID")
                .long("key-id")
                .value_name("KEY_ID")
                .help("B2 application key ID")
                .required(true)
        )
        .arg(
            Arg::new("KEY")
                .env("B2_APPLICATION_KEY")
                .hide_env_values(true)
                .long("key")
                .value_name("KEY")
                .help("B2 application key")
                .required(true)
        )
        .arg(
            Arg::new("REGION")
                .env("B2_REGION")
                .long("region")
                .short('r')
                .value_name("REGION")
                .help("B2 region the bucket lives in")
                .default_value(DEFAULT_REGION)
                .value_parser(is_valid_region)
        )
        .arg(
            Arg::new("NO_PROGRESS")
                .long("no-progress")
                .help("Don't show the running total while listing")
                .action(ArgAction::SetTrue)
        )
}

/// Parse the command line arguments
pub fn parse_args() -> ArgMatches {
    debug!("Parsing command line arguments");

    create_app().get_matches()
}

/// Build a `ClientConfig` from parsed arguments.
///
/// The region is resolved here, so an unknown region never reaches a client.
pub fn client_config(matches: &ArgMatches) -> Result<ClientConfig> {
    // Required and defaulted arguments, clap guarantees these are present.
    let bucket_name = matches.get_one::<String>("BUCKET")
        .map(String::as_str)
        .unwrap_or_default();

    let key_id = matches.get_one::<String>("KEY_ID")
        .map(String::as_str)
        .unwrap_or_default();

    let key = matches.get_one::<String>("KEY")
        .map(String::as_str)
        .unwrap_or_default();

    let region = matches.get_one::<String>("REGION")
        .map(String::as_str)
        .unwrap_or(DEFAULT_REGION);

    let config = ClientConfig {
        bucket_name: bucket_name.into(),
        credentials: Credentials::new(key_id, key)?,
        region:      Region::from_name(region)?,
    };

    debug!("Client config: {:?}", config);

    Ok(config)
}

/// Returns `true` if the running total should be displayed.
pub fn show_progress(matches: &ArgMatches) -> bool {
    !matches.get_flag("NO_PROGRESS")
}

/// Returns the most verbose level to log at.
///
/// Log lines share stderr with the running total, so only warnings are shown
/// while it's being drawn.
pub fn log_level(matches: &ArgMatches) -> Level {
    if show_progress(matches) {
        Level::WARN
    }
    else {
        Level::INFO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;
    use pretty_assertions::assert_eq;

    fn args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec![
            "b2du",
            "--key-id", "0041234567890ab0000000001",
            "--key", "K004testsecret",
        ];

        args.extend_from_slice(extra);
        args
    }

    #[test]
    fn test_client_config() {
        let matches = create_app()
            .try_get_matches_from(args(&["--region", "eu-central-003", "photos"]))
            .unwrap();

        let config = client_config(&matches).unwrap();

        assert_eq!(config.bucket_name, "photos");
        assert_eq!(config.credentials.key_id(), "0041234567890ab0000000001");
        assert_eq!(config.region.name(), "eu-central-003");
        assert_eq!(
            config.region.endpoint(),
            "https://s3.eu-central-003.backblazeb2.com",
        );
        assert!(show_progress(&matches));
    }

    #[test]
    fn test_default_region() {
        let matches = create_app()
            .try_get_matches_from(args(&["--no-progress", "photos"]))
            .unwrap();

        let config = client_config(&matches).unwrap();

        assert_eq!(config.region.name(), DEFAULT_REGION);
        assert!(!show_progress(&matches));
    }

    #[test]
    fn test_log_level() {
        let tests = vec![
            (vec!["photos"],                  Level::WARN),
            (vec!["--no-progress", "photos"], Level::INFO),
        ];

        for test in tests {
            let extra    = test.0;
            let expected = test.1;

            let matches = create_app()
                .try_get_matches_from(args(&extra))
                .unwrap();

            assert_eq!(log_level(&matches), expected);
        }
    }

    #[test]
    fn test_invalid_region_rejected() {
        let ret = create_app()
            .try_get_matches_from(args(&["--region", "nonexistent-region", "photos"]));

        assert!(ret.is_err());
    }

    #[test]
    fn test_empty_key_is_authentication_error() {
        let matches = create_app()
            .try_get_matches_from(vec!["b2du", "--key-id", "abc", "--key", "", "photos"])
            .unwrap();

        let ret = client_config(&matches).unwrap_err();

        assert!(matches!(
            ret.downcast_ref::<Error>(),
            Some(Error::Authentication(_)),
        ));
    }

    #[test]
    fn test_blank_bucket_name_rejected() {
        let tests = vec![
            "",
            "  ",
            "\t",
        ];

        for bucket in tests {
            let ret = create_app().try_get_matches_from(args(&[bucket]));

            assert!(ret.is_err(), "bucket name {:?} was accepted", bucket);
        }
    }

    #[test]
    fn test_is_valid_bucket_name() {
        let tests = vec![
            ("photos",     true),
            ("my-backups", true),
            ("",           false),
            ("   ",        false),
        ];

        for test in tests {
            let bucket   = test.0;
            let expected = test.1;

            assert_eq!(is_valid_bucket_name(bucket).is_ok(), expected);
        }
    }

    #[test]
    fn test_is_valid_region() {
        let tests = vec![
            ("us-west-004", true),
            ("us-east-005", true),
            ("us-east-1",   false),
            ("",            false),
        ];

        for test in tests {
            let region   = test.0;
            let expected = test.1;

            assert_eq!(is_valid_region(region).is_ok(), expected);
        }
    }

    #[test]
    fn test_app_is_valid() {
        create_app().debug_assert();
    }
}
