//! Path classification. Pure, so every rule is unit tested without a server.

use crud_framework::EntityId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` when the service is mounted elsewhere.
    Root,
    /// `<base>`
    Collection,
    /// `/health` or `<base>/health`
    Health,
    /// `<base>/<keyword>/<value>`, with `value` percent-decoded.
    Filtered { keyword: String, value: String },
    /// `<base>/<id>`
    Item(EntityId),
    Unmatched,
}

impl Route {
    /// Classifies `path` relative to `base`. Rules are tried in order: empty, `health`,
    /// filter keyword plus value, numeric id.
    pub fn parse(path: &str, base: &str, filters: &[&str]) -> Self {
        let Some(rest) = strip_base(path, base) else {
            return match path.trim_end_matches('/') {
                "" => Route::Root,
                "/health" => Route::Health,
                _ => Route::Unmatched,
            };
        };

        let segments: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Collection,
            ["health"] => Route::Health,
            [keyword, value] if filters.contains(keyword) => match urlencoding::decode(value) {
                Ok(value) => Route::Filtered {
                    keyword: keyword.to_string(),
                    value: value.into_owned(),
                },
                Err(_) => Route::Unmatched,
            },
            [id] if id.bytes().all(|b| b.is_ascii_digit()) => {
                id.parse().map_or(Route::Unmatched, Route::Item)
            }
            _ => Route::Unmatched,
        }
    }
}

fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(base.trim_end_matches('/'))?;
    (rest.is_empty() || rest.starts_with('/')).then_some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "/api/pedidos";
    const FILTERS: &[&str] = &["estado", "cliente"];

    fn parse(path: &str) -> Route {
        Route::parse(path, BASE, FILTERS)
    }

    #[test]
    fn test_collection() {
        assert_eq!(parse("/api/pedidos"), Route::Collection);
        assert_eq!(parse("/api/pedidos/"), Route::Collection);
    }

    #[test]
    fn test_health_inside_and_outside_base() {
        assert_eq!(parse("/api/pedidos/health"), Route::Health);
        assert_eq!(parse("/health"), Route::Health);
    }

    #[test]
    fn test_item() {
        assert_eq!(parse("/api/pedidos/42"), Route::Item(42));
        assert_eq!(parse("/api/pedidos/abc"), Route::Unmatched);
        assert_eq!(parse("/api/pedidos/-1"), Route::Unmatched);
        assert_eq!(parse("/api/pedidos/+1"), Route::Unmatched);
        assert_eq!(parse("/api/pedidos/%31"), Route::Unmatched);
        assert_eq!(parse("/api/pedidos/99999999999999999999999"), Route::Unmatched);
    }

    #[test]
    fn test_filtered() {
        assert_eq!(
            parse("/api/pedidos/estado/entregado"),
            Route::Filtered {
                keyword: "estado".into(),
                value: "entregado".into()
            }
        );
        assert_eq!(parse("/api/pedidos/rol/admin"), Route::Unmatched);
        assert_eq!(parse("/api/pedidos/estado"), Route::Unmatched);
    }

    #[test]
    fn test_filter_value_is_percent_decoded() {
        assert_eq!(
            parse("/api/pedidos/estado/en%20camino"),
            Route::Filtered {
                keyword: "estado".into(),
                value: "en camino".into()
            }
        );
        assert_eq!(
            Route::parse("/productos/categoria/l%C3%ADnea%20hogar", "/productos", &["categoria"]),
            Route::Filtered {
                keyword: "categoria".into(),
                value: "línea hogar".into()
            }
        );
        // %FF alone is not UTF-8.
        assert_eq!(parse("/api/pedidos/estado/%FF"), Route::Unmatched);
    }

    #[test]
    fn test_paths_outside_base() {
        assert_eq!(parse("/api/pedidosx"), Route::Unmatched);
        assert_eq!(parse("/otra/1"), Route::Unmatched);
        assert_eq!(parse("/"), Route::Root);
        assert_eq!(parse("/health/x"), Route::Unmatched);
    }

    #[test]
    fn test_too_many_segments() {
        assert_eq!(parse("/api/pedidos/1/extra"), Route::Unmatched);
        assert_eq!(parse("/api/pedidos/estado/a/b"), Route::Unmatched);
    }
}
