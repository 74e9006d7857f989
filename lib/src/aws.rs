use std::borrow::Cow;
use std::env;

use aws_config::default_provider::credentials::DefaultCredentialsChain;
use aws_config::Region;

/// SNS client plus the ARN prefix that broadcast topic names are resolved against.
#[derive(Clone)]
pub struct SnsClient {
    pub client: aws_sdk_sns::Client,
    pub topic_arn_prefix: String,
}

impl SnsClient {
    /// `LOCAL_ENDPOINT` and `LOCAL_REGION` point the client at a local emulator.
    pub async fn new(
        aws_config: &aws_config::SdkConfig,
        topic_arn_prefix: &str,
    ) -> SnsClient {
        let endpoint = env::var("LOCAL_ENDPOINT").ok();

        let client = match endpoint {
            None => aws_sdk_sns::Client::new(aws_config),
            Some(url) => {
                let region = env::var("LOCAL_REGION").map(|region| Region::new(Cow::Owned(region))).ok();

                aws_sdk_sns::Client::from_conf(
                    aws_sdk_sns::config::Builder::from(aws_config)
                        .endpoint_url(url)
                        .region(region)
                        .credentials_provider(DefaultCredentialsChain::builder().build().await)
                        .build(),
                )
            },
        };

        SnsClient {
            client,
            topic_arn_prefix: topic_arn_prefix.to_string(),
        }
    }

    pub fn topic_arn(
        &self,
        topic: &str,
    ) -> String {
        resolve_topic_arn(&self.topic_arn_prefix, topic)
    }
}

fn resolve_topic_arn(
    prefix: &str,
    topic: &str,
) -> String {
    if topic.starts_with("arn:") || prefix.is_empty() {
        return topic.to_string();
    }

    if prefix.ends_with(':') {
        format!("{prefix}{topic}")
    } else {
        format!("{prefix}:{topic}")
    }
}
