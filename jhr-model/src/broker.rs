use crate::ids::BrokerId;

/// Storage bucket holding broker portraits.
pub const BROKER_PHOTO_BUCKET: &str = "brokers";

/// Portrait used when a broker row has no photo path.
pub const DEFAULT_BROKER_AVATAR: &str = "defaultAvatar.jpg";

/// A broker profile as stored in the hosted `brokers` table.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Broker {
    pub id: BrokerId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub area: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub phone_us: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub email: Option<String>,
    #[cfg_attr(feature = "serde", serde(default, rename = "photoUrl"))]
    pub photo_url: Option<String>,
}

impl Broker {
    /// Object path of the broker portrait inside [`BROKER_PHOTO_BUCKET`].
    ///
    /// Blank or missing paths fall back to [`DEFAULT_BROKER_AVATAR`].
    pub fn photo_path(&self) -> &str {
        self.photo_url
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_BROKER_AVATAR)
    }

    /// Public URL of the portrait given the storage host's public base
    /// (for example `https://<project>/storage/v1/object/public`).
    pub fn photo_public_url(&self, storage_base: &str) -> String {
        format!(
            "{}/{}/{}",
            storage_base.trim_end_matches('/'),
            BROKER_PHOTO_BUCKET,
            self.photo_path()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_photo_falls_back_to_default_avatar() {
        let mut broker = Broker {
            id: BrokerId::new("b1"),
            name: "Dana".into(),
            photo_url: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(broker.photo_path(), DEFAULT_BROKER_AVATAR);

        broker.photo_url = None;
        assert_eq!(broker.photo_path(), DEFAULT_BROKER_AVATAR);

        broker.photo_url = Some(" dana.jpg ".into());
        assert_eq!(broker.photo_path(), "dana.jpg");
    }

    #[test]
    fn public_url_joins_bucket_and_path() {
        let broker = Broker {
            id: BrokerId::new("b1"),
            name: "Dana".into(),
            photo_url: Some("dana.jpg".into()),
            ..Default::default()
        };
        assert_eq!(
            broker.photo_public_url("https://cdn.example/storage/"),
            "https://cdn.example/storage/brokers/dana.jpg"
        );
    }
}
