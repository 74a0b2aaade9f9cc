use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;
use bytes::Bytes;
use tracing::info;

use super::{ResumeStore, StoreError};

/// S3 error codes that mean the request was rejected for its credentials.
const AUTH_REJECTION_CODES: &[&str] = &[
    "InvalidAccessKeyId",
    "SignatureDoesNotMatch",
    "ExpiredToken",
    "InvalidToken",
];

/// Resume store backed by an S3 bucket (or an S3-compatible endpoint).
#[derive(Clone)]
pub struct S3ResumeStore {
    client: S3Client,
    bucket: String,
}

impl S3ResumeStore {
    /// Builds the client from the shared AWS config. Credentials come from the
    /// default provider chain (instance role in production). An endpoint
    /// override switches to path-style addressing for MinIO.
    pub fn new(sdk_config: &SdkConfig, bucket: String, endpoint: Option<&str>) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);
        if let Some(endpoint) = endpoint {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }
        S3ResumeStore {
            client: S3Client::from_conf(builder.build()),
            bucket,
        }
    }

}

fn s3_location(bucket: &str, key: &str) -> String {
    format!("s3://{bucket}/{key}")
}

#[async_trait]
impl ResumeStore for S3ResumeStore {
    async fn store(
        &self,
        key: &str,
        body: Bytes,
        content_type: Option<&str>,
    ) -> Result<String, StoreError> {
        let size = body.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .set_content_type(content_type.map(str::to_string))
            .send()
            .await
            .map_err(|e| classify_put_error(&e))?;

        let location = s3_location(&self.bucket, key);
        info!(%location, size, "Uploaded resume to S3");
        Ok(location)
    }
}

/// Maps an SDK failure to `CredentialsUnavailable` when no credentials could
/// be resolved or the service rejected them, `Backend` otherwise.
fn classify_put_error<E>(err: &E) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
{
    let rejected = err
        .code()
        .is_some_and(|code| AUTH_REJECTION_CODES.contains(&code));

    if rejected || chain_has_credentials_error(err) {
        return StoreError::CredentialsUnavailable;
    }
    StoreError::Backend(DisplayErrorContext(err).to_string())
}

fn chain_has_credentials_error(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.is::<CredentialsError>() {
            return true;
        }
        current = e.source();
    }
    false
}
