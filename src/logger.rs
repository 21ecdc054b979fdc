use {
    actix_web::{
        body::EitherBody,
        dev::{Service, ServiceRequest, ServiceResponse, Transform},
        http::header::{HeaderName, HeaderValue},
        Error,
    },
    futures::{
        future::{ok, Ready},
        task::{Context, Poll},
    },
    std::{future::Future, pin::Pin},
    tracing::Span,
    tracing_futures::Instrument,
    uuid::Uuid,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(TracingLoggerMiddleware { service })
    }
}

#[doc(hidden)]
pub struct TracingLoggerMiddleware<S> {
    service: S,
}

#[derive(Clone, Copy)]
pub struct RequestId(Uuid);

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let user_agent = req
            .headers()
            .get("User-Agent")
            .map(|h| h.to_str().unwrap_or(""))
            .unwrap_or("");

        let request_id = RequestId(Uuid::new_v4());

        let span = tracing::info_span!(
            "Request",
            request_path = %req.path(),
            user_agent = %user_agent,
            client_ip_address = %req.connection_info().realip_remote_addr().unwrap_or(""),
            request_id = %request_id,
            status_code = tracing::field::Empty,
        );

        // Kept so an error from further in can still be turned into a response.
        let http_req = req.request().clone();

        let fut = self.service.call(req);

        Box::pin(
            async move {
                let mut response = match fut.await {
                    Ok(response) => response.map_into_left_body(),
                    Err(error) => ServiceResponse::from_err(error, http_req).map_into_right_body(),
                };

                Span::current().record("status_code", &response.status().as_u16());

                if let Ok(value) = HeaderValue::from_str(&request_id.to_string()) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}
