//! Runs the fetch exercises end to end: users, a single user, create and
//! delete, a joke, and a local story file.

mod config;

use fetch_core::{
    count_mentions, read_story, render_error, render_joke, render_users, FileInfo, JokeClient,
    UsersClient,
};

use crate::config::DemoConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = DemoConfig::from_env()?;
    log::info!("using {}", config.base_url);

    show_users(&config).await;
    show_joke(&config).await;
    show_story(&config).await?;
    Ok(())
}

/// Fetch errors are already logged by the helper; here they are only shown.
async fn show_users(config: &DemoConfig) {
    let client = UsersClient::new(&config.base_url);

    match client.get_users_typed().await {
        Ok(users) => {
            println!("Users:");
            for node in render_users(&users) {
                println!("{node}");
            }
        }
        Err(e) => println!("error: {}", render_error(&e)),
    }

    match client.get_user_typed(config.user_id).await {
        Ok(user) => println!("User {}: {} {}", user.data.id, user.data.first_name, user.data.last_name),
        Err(e) => println!("error: {}", render_error(&e)),
    }

    match client.create_user_typed("morpheus", "leader").await {
        Ok(created) => println!("Created {} ({}) with id {}", created.name, created.job, created.id),
        Err(e) => println!("error: {}", render_error(&e)),
    }

    match client.delete_user(config.user_id).await {
        Ok(_) => println!("Deleted user {}", config.user_id),
        Err(e) => println!("error: {}", render_error(&e)),
    }
}

async fn show_joke(config: &DemoConfig) {
    match JokeClient::new(&config.joke_url).get_joke().await {
        Ok(joke) => {
            for line in render_joke(&joke) {
                println!("{line}");
            }
        }
        Err(e) => println!("error: {}", render_error(&e)),
    }
}

async fn show_story(config: &DemoConfig) -> anyhow::Result<()> {
    println!("Reading {}", config.story_path.display());
    let info = FileInfo::from_contents(read_story(&config.story_path).await?);
    println!("It is {} characters long.", info.length);
    println!(
        "There were {} mentions of \"Raven\".",
        count_mentions(&info.contents, "raven")
    );
    Ok(())
}
