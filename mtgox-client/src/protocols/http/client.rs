use bytes::Bytes;
use tracing::debug;

use crate::error::ClientError;

use super::{
    http_parser::HttpParser, request_builder::ExchangeRequestBuilder, rest_request::RestRequest,
};

/*----- */
// RestClient
/*----- */
#[derive(Debug)]
pub struct RestClient<Parser, RequestBuilder> {
    pub http_client: reqwest::Client,
    pub base_url: &'static str,
    pub parser: Parser,
    pub request_builder: RequestBuilder,
}

impl<Parser, RequestBuilder> RestClient<Parser, RequestBuilder>
where
    RequestBuilder: ExchangeRequestBuilder,
{
    pub fn new(base_url: &'static str, parser: Parser, request_builder: RequestBuilder) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url,
            parser,
            request_builder,
        }
    }

    pub async fn execute<Request>(
        &self,
        request: Request,
    ) -> Result<Request::Response, Parser::OutputError>
    where
        Request: RestRequest,
        Parser: HttpParser,
    {
        let request = self.build(&request)?;
        let (status, payload) = self.measured_execution::<Request>(request).await?;
        self.parser.parse::<Request::Response>(status, &payload)
    }

    pub fn build<Request>(&self, request: &Request) -> Result<reqwest::Request, ClientError>
    where
        Request: RestRequest,
    {
        let url = format!("{}{}", self.base_url, request.path());
        let builder = self
            .http_client
            .request(Request::method(), url)
            .timeout(Request::timeout());

        self.request_builder.build_signed_request(builder, request)
    }

    pub async fn measured_execution<Request>(
        &self,
        request: reqwest::Request,
    ) -> Result<(reqwest::StatusCode, Bytes), ClientError>
    where
        Request: RestRequest,
    {
        let path = request.url().path().to_owned();
        let start = std::time::Instant::now();
        let response = self.http_client.execute(request).await?;
        let duration = start.elapsed().as_millis() as u64;

        debug!(
            http_method = %Request::method(),
            base_url = self.base_url,
            path = %path,
            status_code = %response.status(),
            duration_ms = duration,
            "executed HTTP request"
        );

        let status_code = response.status();
        let payload = response.bytes().await?;

        Ok((status_code, payload))
    }
}
