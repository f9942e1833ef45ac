//! estimo client binary.
//!
//! Flow: banner -> action selection -> config -> connect -> read loop
//! until the server closes the connection, a session-fatal error
//! occurs, or the operator hits ctrl-c (which triggers a best-effort
//! close handshake before exit).

use tracing_subscriber::{fmt, EnvFilter};

use estimo_cli::prompt::StdinPrompt;
use estimo_cli::session::Session;
use estimo_cli::{config, dispatch, outbound, transport};

const BANNER: &str = r"
  ___  ___  _   _  _ __ ___    ___
 / _ \/ __|| |_(_)| '_ ` _ \  / _ \
|  __/\__ \|  _| || | | | | || (_) |
 \___||___/ \__|_||_| |_| |_| \___/
";

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    println!("{BANNER}");
    println!("Welcome! Press CTRL+C to exit when you're done.\n");

    let mut stdin = StdinPrompt::new();

    let action = match transport::handshake::prompt_action(&mut stdin).await {
        Ok(Some(action)) => action,
        Ok(None) => {
            tracing::error!("invalid choice, exiting");
            return;
        }
        Err(e) => {
            tracing::error!(error = %e, "unable to read choice, exiting");
            return;
        }
    };

    let cfg = config::load_or_default("estimo.yaml").expect("config load failed");

    let plan = match transport::handshake::plan(&cfg, action, &mut stdin).await {
        Ok(plan) => plan,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            return;
        }
    };

    let (ws, mut reader) = match transport::ws::connect(&plan.endpoint).await {
        Ok(pair) => pair,
        Err(e) => {
            tracing::error!(error = %e, "exiting");
            return;
        }
    };

    let mut session = Session::new(Box::new(ws), Box::new(stdin));

    // An explicit join announces the room right after connecting; a
    // created room is announced when CREATE_ROOM arrives.
    if let Some(room_id) = &plan.join_room {
        outbound::send_join_room(&mut session, room_id).await;
    }

    let dispatcher = dispatch::register_handlers();

    tokio::select! {
        res = transport::ws::read_loop(&mut reader, &mut session, &dispatcher) => {
            if let Err(e) = res {
                tracing::error!(error = %e, "error while handling the received event, exiting");
            }
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, exiting");
        }
    }

    session.close().await;
}
