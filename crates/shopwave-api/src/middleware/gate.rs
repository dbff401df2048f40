//! Edge gate middleware guarding protected path prefixes.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use tracing::debug;

use shopwave_auth::AuthContext;
use shopwave_core::config::auth::AuthConfig;
use shopwave_core::config::gate::GateConfig;
use shopwave_core::error::AppError;
use shopwave_core::result::AppResult;
use shopwave_entity::user::UserRole;

use crate::state::AppState;

/// Identity header: subject id.
pub const HEADER_USER_ID: &str = "x-user-id";
/// Identity header: role in uppercase wire form.
pub const HEADER_USER_ROLE: &str = "x-user-role";
/// Identity header: email address.
pub const HEADER_USER_EMAIL: &str = "x-user-email";
/// Identity header: avatar reference, empty when absent.
pub const HEADER_USER_IMAGE: &str = "x-user-image";

const IDENTITY_HEADERS: [&str; 4] = [
    HEADER_USER_ID,
    HEADER_USER_ROLE,
    HEADER_USER_EMAIL,
    HEADER_USER_IMAGE,
];

/// A compiled protected-prefix rule.
#[derive(Debug, Clone)]
pub struct GateRule {
    /// Path prefix guarded by this rule.
    pub prefix: String,
    /// Minimum role; `None` admits any verified session.
    pub required_role: Option<UserRole>,
}

/// Compiled gate rules plus the two redirect targets.
#[derive(Debug, Clone)]
pub struct GateRules {
    rules: Vec<GateRule>,
    sign_in_path: String,
    denied_path: String,
}

impl GateRules {
    /// Compiles configuration into gate rules, parsing role names.
    ///
    /// A misspelled role name fails startup instead of silently admitting
    /// every session.
    pub fn from_config(gate: &GateConfig, auth: &AuthConfig) -> AppResult<Self> {
        let mut rules = Vec::with_capacity(gate.rules.len());
        for rule in &gate.rules {
            let required_role = match &rule.role {
                Some(name) => Some(name.parse::<UserRole>().map_err(|e| {
                    AppError::configuration(format!(
                        "gate rule for '{}': {}",
                        rule.prefix, e.message
                    ))
                })?),
                None => None,
            };
            rules.push(GateRule {
                prefix: rule.prefix.clone(),
                required_role,
            });
        }

        Ok(Self {
            rules,
            sign_in_path: auth.sign_in_path.clone(),
            denied_path: gate.denied_path.clone(),
        })
    }

    /// Finds the rule governing `path`. The longest matching prefix wins,
    /// so a more specific rule can relax its parent's role demand.
    pub fn matching(&self, path: &str) -> Option<&GateRule> {
        self.rules
            .iter()
            .filter(|rule| prefix_matches(&rule.prefix, path))
            .max_by_key(|rule| rule.prefix.len())
    }

    /// Number of compiled rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True when no prefixes are guarded.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Redirect target for unauthenticated requests.
    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    /// Redirect target for authenticated-but-underprivileged requests.
    pub fn denied_path(&self) -> &str {
        &self.denied_path
    }
}

/// Whole-segment prefix match: `/seller` governs `/seller` and
/// `/seller/orders` but not `/sellerette`.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}

/// The edge gate, run once per request.
///
/// Strips client-supplied identity headers, verifies the session cookie
/// into an [`AuthContext`] request extension, and enforces the
/// protected-prefix rules: unauthenticated requests are redirected (307)
/// to the sign-in route, underprivileged ones to the landing path.
/// Identity headers are injected strictly after verification succeeds;
/// verification failure never propagates as an error past the gate.
pub async fn edge_gate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    // The identity headers are a server-internal channel; client-supplied
    // values are never trusted.
    for name in IDENTITY_HEADERS {
        request.headers_mut().remove(name);
    }

    let token = jar
        .get(state.session_cookie.name())
        .map(|cookie| cookie.value().to_string());
    let ctx = AuthContext::from_cookie_token(&state.jwt_decoder, token.as_deref());

    if let Some(rule) = state.gate_rules.matching(request.uri().path()) {
        let Some(claims) = ctx.claims() else {
            debug!(path = %request.uri().path(), "Unauthenticated request to protected prefix");
            return Redirect::temporary(state.gate_rules.sign_in_path()).into_response();
        };

        if let Some(required) = rule.required_role {
            if !claims.role.has_at_least(required) {
                debug!(
                    path = %request.uri().path(),
                    role = %claims.role,
                    required = %required,
                    "Underprivileged request to protected prefix"
                );
                return Redirect::temporary(state.gate_rules.denied_path()).into_response();
            }
        }

        let headers = request.headers_mut();
        headers.insert(HEADER_USER_ID, header_value(&claims.sub.to_string()));
        headers.insert(HEADER_USER_ROLE, header_value(claims.role.as_str()));
        headers.insert(HEADER_USER_EMAIL, header_value(&claims.email));
        headers.insert(
            HEADER_USER_IMAGE,
            header_value(claims.image_url.as_deref().unwrap_or("")),
        );
    }

    request.extensions_mut().insert(ctx);

    next.run(request).await
}

fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static(""))
}
