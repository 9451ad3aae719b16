use crate::{
    error::CatalogError,
    spotify::SpotifyClient,
    types::{AudioFeatures, AudioFeaturesResponse},
};

impl SpotifyClient {
    /// Retrieves audio features for a batch of tracks.
    ///
    /// The response wrapper is accepted under both `audio_features` and the
    /// older `audio_attributes` key. Tracks without analysis come back as
    /// `None`.
    pub async fn get_several_audio_features(
        &self,
        ids: &[String],
    ) -> Result<Vec<Option<AudioFeatures>>, CatalogError> {
        let api_url = format!(
            "{url}/audio-features?ids={track_ids}",
            url = &self.api_url,
            track_ids = ids.join(",")
        );

        let json = self.get_json::<AudioFeaturesResponse>(&api_url).await?;
        Ok(json.audio_features)
    }
}
