//! Backend access.
//!
//! [`DashboardApi`] is the seam between the dashboard and its data source.
//! The reqwest-backed [`HttpApi`] is only built with the `api` feature; tests
//! plug in an in-memory implementation.

use crate::bundle::ChartDataBundle;
use crate::error::ApiError;
use crate::filters::FiltersResponse;
use crate::query::CanonicalQuery;

/// Source of filter vocabularies and chart series.
///
/// Futures are not required to be `Send`: the dashboard runs on a single
/// threaded event loop (browser or current-thread runtime).
#[allow(async_fn_in_trait)]
pub trait DashboardApi {
    /// `GET /filters/`
    async fn fetch_filters(&self) -> Result<FiltersResponse, ApiError>;

    /// `GET /chart-data/?<query>`
    async fn fetch_chart_data(&self, query: &CanonicalQuery) -> Result<ChartDataBundle, ApiError>;
}

#[cfg(feature = "api")]
pub use http::HttpApi;

#[cfg(feature = "api")]
mod http {
    use super::*;
    use crate::config::DashboardConfig;
    use reqwest::Client;
    use serde::de::DeserializeOwned;

    /// [`DashboardApi`] over HTTP.
    #[derive(Clone)]
    pub struct HttpApi {
        client: Client,
        config: DashboardConfig,
    }

    impl HttpApi {
        pub fn new(config: DashboardConfig) -> Self {
            Self {
                client: Client::new(),
                config,
            }
        }

        pub fn config(&self) -> &DashboardConfig {
            &self.config
        }

        async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
            log::debug!("api: GET {}", url);
            let response = self
                .client
                .get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport {
                    url: url.clone(),
                    message: e.to_string(),
                })?;

            let status = response.status();
            if !status.is_success() {
                return Err(ApiError::Status {
                    url,
                    status: status.as_u16(),
                });
            }

            response.json::<T>().await.map_err(|e| ApiError::Decode {
                url,
                message: e.to_string(),
            })
        }
    }

    impl DashboardApi for HttpApi {
        async fn fetch_filters(&self) -> Result<FiltersResponse, ApiError> {
            self.get_json(self.config.filters_url()).await
        }

        async fn fetch_chart_data(
            &self,
            query: &CanonicalQuery,
        ) -> Result<ChartDataBundle, ApiError> {
            self.get_json(self.config.chart_data_url(query)).await
        }
    }
}
