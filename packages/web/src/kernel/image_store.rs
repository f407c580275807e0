//! Durable object storage for uploaded images.

use anyhow::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ChecksumAlgorithm;
use aws_sdk_s3::Client as S3Client;

use crate::kernel::BaseImageStore;

pub struct S3ImageStore {
    client: S3Client,
    bucket: String,
}

impl S3ImageStore {
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl BaseImageStore for S3ImageStore {
    async fn save_image(&self, bytes: Vec<u8>, name: &str) -> Result<()> {
        // Single write, never mutated afterwards. The checksum has the
        // store validate the transfer before confirming durability.
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(name)
            .content_type("image/jpeg")
            .checksum_algorithm(ChecksumAlgorithm::Crc32)
            .body(ByteStream::from(bytes))
            .send()
            .await?;
        tracing::info!(%name, "saved image");
        Ok(())
    }
}
