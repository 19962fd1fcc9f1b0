use crate::{parse_stations, Error, Gateway, Station, FEED_FILE};

impl Gateway {
    pub async fn get_stations(&self) -> Result<Vec<Station>, Error> {
        //https://<base>/RADSERVICEOGD.csv

        let url = self.resolve(FEED_FILE)?;
        let text = self.get_string(&url).await?;
        Ok(parse_stations(&text))
    }

    /// Like `get_stations`, but a failed load is logged and yields no stations.
    pub async fn load_stations(&self) -> Vec<Station> {
        match self.get_stations().await {
            Ok(stations) => stations,
            Err(err) => {
                tracing::error!("Error loading stations: {}", err);
                vec![]
            }
        }
    }
}
