#![allow(dead_code)]

mod app;
mod commands;
mod config;
mod director;
mod error;
mod event_loop;
mod focus;
mod ipc;
mod keybinds;
mod monitor;
mod rules;
mod utils;
mod win_tree;
mod window_registry;
mod workspace;

use anyhow::Result;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use app::{initialize_logging, load_and_validate_config, run_event_loop, scan_and_manage_windows};
use commands::CommandExecutor;
use config::ConfigWatcher;
use director::Director;
use event_loop::EventLoop;
use ipc::{EventBroadcaster, IpcServer, RequestHandler};
use keybinds::KeybindManager;
use tracing::{error, info, warn};

fn main() -> Result<()> {
    initialize_logging();

    info!("==============================================");
    info!("Starting splitwm");
    info!("==============================================");

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    ctrlc::set_handler(move || {
        info!("Received Ctrl+C signal, initiating shutdown...");
        running_clone.store(false, Ordering::SeqCst);
    })?;

    let (config_loader, config) = load_and_validate_config()?;

    info!("Initializing director...");
    let director = Director::new(config.clone());
    director.refresh()?;
    info!("Director initialized successfully");

    info!("Starting event loop...");
    let mut event_loop = EventLoop::new();
    event_loop.start()?;
    info!("Event loop started successfully");

    info!("Registering keybindings...");
    let mut keybind_manager = KeybindManager::new();
    match keybind_manager.register_keybinds(config.keybinds.clone()) {
        Ok(()) => info!("Keybindings registered successfully"),
        Err(e) => {
            warn!("Failed to register some keybindings: {}", e);
            warn!("Some hotkeys may not be available");
        }
    }

    info!("Scanning for existing windows...");
    scan_and_manage_windows(&director)?;

    info!("Starting configuration watcher...");
    let config_watcher = match ConfigWatcher::new(config_loader.get_config_path().clone()) {
        Ok(watcher) => {
            info!("Configuration hot-reload enabled");
            Some(watcher)
        }
        Err(e) => {
            warn!("Failed to start configuration watcher: {}", e);
            warn!("Hot-reload will not be available");
            None
        }
    };

    info!("==============================================");
    info!("splitwm is now running");
    info!("Press Ctrl+C to exit");
    if config_watcher.is_some() {
        info!("Configuration hot-reload is active");
    }
    info!("==============================================");

    let executor = Arc::new(CommandExecutor::new());
    info!("Command executor initialized and ready");

    info!("Starting IPC server thread...");
    spawn_ipc_server(director.clone(), Arc::clone(&executor));

    run_event_loop(
        &director,
        &mut event_loop,
        &executor,
        &mut keybind_manager,
        &running,
        config_watcher,
        &config_loader,
    )?;

    info!("Stopping event loop...");
    event_loop.stop()?;
    info!("splitwm stopped successfully");

    Ok(())
}

/// Spawn the IPC server on its own thread with a dedicated tokio runtime.
///
/// The main event loop is a synchronous Win32 message pump, so the async
/// named-pipe server runs independently rather than sharing a runtime with it.
/// `Director` is cheap to clone and does its own locking, so it can be handed
/// to the server thread directly.
fn spawn_ipc_server(director: Director, executor: Arc<CommandExecutor>) {
    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                error!("Failed to start IPC server runtime: {}", e);
                return;
            }
        };

        runtime.block_on(async move {
            let broadcaster = Arc::new(EventBroadcaster::new());
            let handler = Arc::new(RequestHandler::new(director, executor));
            let server = Arc::new(IpcServer::new(broadcaster).with_handler(handler));

            if let Err(e) = server.start().await {
                error!("IPC server exited: {}", e);
            }
        });
    });
}
