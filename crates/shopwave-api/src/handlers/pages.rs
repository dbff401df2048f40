//! Placeholder server-rendered pages.
//!
//! These exist to demonstrate the header-trusting read path: they render
//! whatever identity the edge gate forwarded, without re-verifying the
//! token themselves.

use axum::response::Html;

use crate::extractors::ForwardedIdentity;

/// GET /seller
pub async fn seller_dashboard(identity: ForwardedIdentity) -> Html<String> {
    Html(format!(
        "<h1>Seller Dashboard</h1><p>Signed in as {} ({})</p>",
        identity.email, identity.role
    ))
}

/// GET /seller/open-shop
pub async fn open_shop_form(identity: ForwardedIdentity) -> Html<String> {
    Html(format!(
        "<h1>Open a Shop</h1><p>Opening a shop for {}</p>",
        identity.email
    ))
}

/// GET /checkout
pub async fn checkout(identity: ForwardedIdentity) -> Html<String> {
    Html(format!(
        "<h1>Checkout</h1><p>Delivering to {}</p>",
        identity.email
    ))
}

/// GET /login
pub async fn sign_in_page() -> Html<&'static str> {
    Html("<h1>Sign In</h1><p>POST /api/auth/signin with {email, password}</p>")
}
