//! Middleware for recording visitor preferences on the request span.
//!
//! Resolves the language and colour mode a request will be rendered with (the
//! same way the page itself does) and emits them as an `info` event inside the
//! current request span, which the OpenTelemetry exporter attaches to the
//! span as `portfolio.language` and `portfolio.theme`.

use std::task::{Context, Poll};

use axum::http::{header, HeaderMap, Request};
use tower::{Layer, Service};

use crate::preferences::Preferences;

#[derive(Clone)]
pub struct RecordPreferencesLayer;

impl<S> Layer<S> for RecordPreferencesLayer {
    type Service = RecordPreferencesService<S>;

    fn layer(&self, service: S) -> Self::Service {
        RecordPreferencesService { inner: service }
    }
}

#[derive(Clone)]
pub struct RecordPreferencesService<S> {
    inner: S,
}

fn preferences(headers: &HeaderMap) -> Preferences {
    let value = |name: header::HeaderName| headers.get(name).and_then(|v| v.to_str().ok());
    Preferences::from_headers(value(header::COOKIE), value(header::ACCEPT_LANGUAGE))
}

impl<S, B> Service<Request<B>> for RecordPreferencesService<S>
where
    S: Service<Request<B>> + Clone + Send + 'static,
    S::Future: Send,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        let prefs = preferences(req.headers());

        tracing::info!(
            portfolio.language = prefs.language.code(),
            portfolio.theme = %prefs.theme,
            "resolved visitor preferences"
        );

        self.inner.call(req)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::fmt;
    use std::future::{ready, Ready};
    use std::sync::{Arc, Mutex};

    use axum::http::HeaderValue;
    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Metadata, Subscriber};

    use super::*;
    use crate::preferences::{ColorMode, Language};

    /// Collects the fields of events that pass an `info` level filter, the
    /// default the telemetry SDK installs.
    #[derive(Clone, Default)]
    struct InfoCollector {
        fields: Arc<Mutex<Vec<(String, String)>>>,
    }

    impl Visit for InfoCollector {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.fields
                .lock()
                .unwrap()
                .push((field.name().to_string(), format!("{value:?}")));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.fields
                .lock()
                .unwrap()
                .push((field.name().to_string(), value.to_string()));
        }
    }

    impl Subscriber for InfoCollector {
        fn enabled(&self, metadata: &Metadata<'_>) -> bool {
            *metadata.level() <= Level::INFO
        }

        fn new_span(&self, _: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _: &Id, _: &Record<'_>) {}

        fn record_follows_from(&self, _: &Id, _: &Id) {}

        fn event(&self, event: &Event<'_>) {
            event.record(&mut self.clone());
        }

        fn enter(&self, _: &Id) {}

        fn exit(&self, _: &Id) {}
    }

    #[derive(Clone)]
    struct NoopService;

    impl Service<Request<()>> for NoopService {
        type Response = ();
        type Error = Infallible;
        type Future = Ready<Result<(), Infallible>>;

        fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Infallible>> {
            Poll::Ready(Ok(()))
        }

        fn call(&mut self, _: Request<()>) -> Self::Future {
            ready(Ok(()))
        }
    }

    #[test]
    fn preferences_are_emitted_at_the_default_level() {
        let collector = InfoCollector::default();
        let request = Request::builder()
            .header(header::COOKIE, "portfolio-lang=de; portfolio-theme=dark")
            .body(())
            .unwrap();

        tracing::subscriber::with_default(collector.clone(), || {
            let _ = RecordPreferencesLayer.layer(NoopService).call(request);
        });

        let fields = collector.fields.lock().unwrap().clone();
        assert!(fields.contains(&("portfolio.language".to_string(), "de".to_string())));
        assert!(fields.contains(&("portfolio.theme".to_string(), "dark".to_string())));
    }

    #[test]
    fn resolves_preferences_from_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("portfolio-theme=dark"));
        headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("de-DE,de;q=0.9"));

        let prefs = preferences(&headers);
        assert_eq!(prefs.language, Language::De);
        assert_eq!(prefs.theme, ColorMode::Dark);
    }

    #[test]
    fn empty_headers_use_defaults() {
        assert_eq!(preferences(&HeaderMap::new()), Preferences::default());
    }
}
