//! Demonstrates authenticating against a mock API, then issuing credentialed calls through the
//! reqwest-backed dispatcher with both the `Result` and the continuation styles.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde::{Deserialize, Serialize};
// self
use happy_token_client::{
	auth::TokenHolder, config::ClientConfig, dispatch::ReqwestDispatcher, request::RequestSpec,
};

#[derive(Serialize)]
struct UserAuthPair<'a> {
	user_id: &'a str,
	auth_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct Wallet {
	gold: u32,
	gems: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/token");
			then.status(200).body(r#"{"AccessToken":"demo-jwt","ExpiresInSecs":900}"#);
		})
		.await;
	let wallet_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/store/promotions").header("authorization", "Bearer demo-jwt");
			then.status(200).body(r#"{"gold":250,"gems":5}"#);
		})
		.await;
	let credentials = Arc::new(TokenHolder::default());
	let dispatcher = ReqwestDispatcher::new(ClientConfig::new(&server.base_url())?, credentials)?;
	let auth_pair = UserAuthPair { user_id: "user-1", auth_token: "device-secret" };
	let credential = dispatcher.authenticate(RequestSpec::post_json("token", &auth_pair)?).await?;

	println!("Authenticated; token expires at {}.", credential.expires_at());

	let wallet: Wallet = dispatcher
		.execute(RequestSpec::post_json("store/promotions", "SPRING")?.authenticated())
		.await?;

	println!("Wallet after promotion: {} gold, {} gems.", wallet.gold, wallet.gems);

	dispatcher
		.execute_with::<Wallet, _, _>(
			RequestSpec::get("store/unknown").authenticated(),
			|wallet| println!("Unexpected wallet: {wallet:?}."),
			|message| println!("Request failed as expected: {message}"),
		)
		.await;

	token_mock.assert_async().await;
	wallet_mock.assert_async().await;

	Ok(())
}
