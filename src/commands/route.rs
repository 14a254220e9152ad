//! Route resolution command.

use serde::Serialize;

use crate::{
    routes::{route_from_hash, PageAction, View},
    Result,
};

#[derive(Debug, Serialize)]
struct ResolvedRoute {
    path: String,
    id: Option<String>,
    view: View,
    action: PageAction,
}

/// Parse a hash fragment and print the view/action it resolves to.
pub fn handle_route(hash: &str, as_json: bool) -> Result<()> {
    let route = route_from_hash(hash);
    let target = route.target();
    let resolved = ResolvedRoute {
        path: route.path,
        id: route.id,
        view: target.view,
        action: target.action,
    };

    if as_json {
        println!("{}", serde_json::to_string_pretty(&resolved)?);
    } else {
        println!("path:   {}", resolved.path);
        println!("id:     {}", resolved.id.as_deref().unwrap_or("-"));
        println!("view:   {}", resolved.view);
        println!("action: {}", resolved.action);
    }

    Ok(())
}
