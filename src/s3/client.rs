// Implements the S3 Client
#![forbid(unsafe_code)]
#![deny(missing_docs)]
use aws_sdk_s3::client::Client as S3Client;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::error::{
    DisplayErrorContext,
    ProvideErrorMetadata,
};
use aws_sdk_s3::operation::list_object_versions::{
    ListObjectVersionsError,
    ListObjectVersionsOutput,
};
use aws_smithy_http::result::SdkError;
use crate::common::{
    ClientConfig,
    Cursor,
    DeleteMarker,
    Error,
    ListingPage,
    VersionEntry,
};
use tracing::debug;

/// S3 error codes that mean the endpoint didn't accept our credentials.
const AUTHENTICATION_ERROR_CODES: &[&str] = &[
    "AccessDenied",
    "ExpiredToken",
    "InvalidAccessKeyId",
    "InvalidToken",
    "SignatureDoesNotMatch",
    "Unauthorized",
];

/// S3 error code for a bucket that doesn't exist.
const NO_SUCH_BUCKET: &str = "NoSuchBucket";

/// The S3 `Client`, talking to a B2 S3 compatible endpoint.
pub struct Client {
    /// The AWS SDK `S3Client`.
    pub client: S3Client,
}

impl Client {
    /// Return a new S3 `Client` with the given `ClientConfig`.
    pub async fn new(config: &ClientConfig) -> Self {
        let region = config.region.clone();

        debug!(
            "new: Creating S3Client in region '{}' at '{}' for key '{}'",
            region.name(),
            region.endpoint(),
            config.credentials.key_id(),
        );

        let credentials: aws_credential_types::Credentials =
            (&config.credentials).into();

        let shared_config = aws_config::from_env()
            .region(region.clone())
            .credentials_provider(credentials)
            .load()
            .await;

        // B2 serves every bucket from the regional endpoint, so we use path
        // style addressing rather than bucket subdomains.
        let s3_config = S3ConfigBuilder::from(&shared_config)
            .endpoint_url(region.endpoint())
            .force_path_style(true)
            .build();

        let client = S3Client::from_conf(s3_config);

        Self {
            client: client,
        }
    }

    /// Return one page of object versions and delete markers in `bucket`,
    /// starting at `cursor`.
    pub async fn list_object_versions(
        &self,
        bucket: &str,
        cursor: Option<&Cursor>,
    ) -> Result<ListingPage, Error> {
        debug!("list_object_versions: '{}' from {:?}", bucket, cursor);

        let key_marker        = cursor.and_then(|c| c.key_marker.clone());
        let version_id_marker = cursor.and_then(|c| c.version_id_marker.clone());

        let output = self.client.list_object_versions()
            .bucket(bucket)
            .set_key_marker(key_marker)
            .set_version_id_marker(version_id_marker)
            .send()
            .await
            .map_err(|e| classify_sdk_error(bucket, e))?;

        page_from_output(&output)
    }
}

/// Turn an SDK failure into one of our `Error` variants.
fn classify_sdk_error(
    bucket: &str,
    error:  SdkError<ListObjectVersionsError>,
) -> Error {
    // Only service errors carry an S3 error code, everything else is a
    // transport problem.
    let code = match &error {
        SdkError::ServiceError(e) => e.err().code().map(String::from),
        _                         => None,
    };

    let message = DisplayErrorContext(&error).to_string();

    debug!(
        "classify_sdk_error: '{}' failed with code {:?}: {}",
        bucket,
        code,
        message,
    );

    classify_error(bucket, code.as_deref(), message)
}

/// Decide which `Error` an S3 error `code` represents.
///
/// Anything that isn't a credential or missing bucket problem is a transport
/// error carrying `message`.
fn classify_error(bucket: &str, code: Option<&str>, message: String) -> Error {
    match code {
        Some(NO_SUCH_BUCKET) => Error::BucketNotFound(bucket.into()),
        Some(code) if AUTHENTICATION_ERROR_CODES.contains(&code) => {
            Error::Authentication(code.into())
        },
        _ => Error::Transport(message),
    }
}

/// Convert an SDK `ListObjectVersionsOutput` into a `ListingPage`.
fn page_from_output(output: &ListObjectVersionsOutput) -> Result<ListingPage, Error> {
    let versions = output
        .versions()
        .unwrap_or_default()
        .iter()
        .map(|v| -> Result<VersionEntry, Error> {
            let key = v.key().unwrap_or_default();

            // Sizes are signed in the SDK, but a negative one means the
            // response is broken.
            let size = u64::try_from(v.size()).map_err(|_| {
                Error::Transport(
                    format!("Negative size {} listed for '{}'", v.size(), key)
                )
            })?;

            Ok(VersionEntry {
                key:  key.into(),
                size: size,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let delete_markers = output
        .delete_markers()
        .unwrap_or_default()
        .iter()
        .map(|m| DeleteMarker {
            key: m.key().unwrap_or_default().into(),
        })
        .collect();

    // If the output was truncated we should have markers to continue from.
    // Without them we'd start again from the top and never finish.
    let next = if output.is_truncated() {
        let cursor = Cursor {
            key_marker:        output.next_key_marker().map(String::from),
            version_id_marker: output.next_version_id_marker().map(String::from),
        };

        if cursor.key_marker.is_none() && cursor.version_id_marker.is_none() {
            return Err(Error::Transport(
                "Truncated listing returned no continuation markers".into()
            ));
        }

        Some(cursor)
    }
    else {
        None
    };

    Ok(ListingPage {
        versions:       versions,
        delete_markers: delete_markers,
        next:           next,
    })
}
