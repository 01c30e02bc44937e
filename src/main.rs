use {
  anyhow::{Context, ensure},
  app::App,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_submission::CommentSubmission,
  comments_list::CommentsList,
  composer::Composer,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  download_response::DownloadResponse,
  effect::Effect,
  event::Event,
  game::Game,
  help_view::HelpView,
  list_view::ListView,
  nav::{NavEntry, NavOutcome, Navigator},
  new_comment::NewComment,
  notice::{Notice, NoticeQueue},
  page::{Page, ViewSpec},
  page_source::PageSource,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    collections::{HashMap, HashSet, VecDeque},
    env,
    fmt::{self, Display, Formatter},
    fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinSet,
  },
  tracing::{debug, error, info, warn},
  transient_message::TransientMessage,
  utils::{
    centered_area, deserialize_lenient_string,
    deserialize_optional_lenient_string, truncate, wrap_text,
  },
  view::{View, ViewContent},
};

mod app;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_submission;
mod comments_list;
mod composer;
mod config;
mod download_response;
mod effect;
mod event;
mod game;
mod help_view;
mod keymap;
mod list_view;
mod logging;
mod nav;
mod new_comment;
mod notice;
mod page;
mod page_source;
mod state;
mod transient_message;
mod utils;
mod view;

const BROWSE_STATUS: &str = "←/→ vistas • 1-9 menú • ↑/↓ juegos • d descargar • c comentar • r recargar • ? ayuda • q salir";

const HELP_TITLE: &str = "Ayuda";
const HELP_STATUS: &str = "Pulsa ? o esc para cerrar la ayuda";

const NOTICE_TITLE: &str = "Aviso";
const NOTICE_HINT: &str = "[enter] aceptar";

const DEFAULT_VIEW: &str = "home";

const NO_COMMENTS_PLACEHOLDER: &str = "No hay comentarios aún.";
const NO_GAMES_PLACEHOLDER: &str = "No hay juegos en esta vista.";
const LOADING_COMMENTS_STATUS: &str = "Cargando comentarios...";

const DOWNLOAD_FAILED: &str = "Hubo un error al intentar descargar el juego.";
const DOWNLOAD_ACCEPTED: &str = "Juego descargado.";
const DOWNLOAD_REFUSED: &str = "Error al descargar el juego: error desconocido";
const COMMENT_SEND_FAILED: &str = "Hubo un error al enviar el comentario.";
const EMPTY_COMMENT: &str = "El comentario no puede estar vacío.";
const RELOAD_FAILED: &str = "Hubo un error al recargar la página.";

const BASE_INDENT: &str = " ";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::from_env()?;

  let _guard = logging::init(&config.log_dir)?;

  info!(base_url = %config.base_url, page = %config.page, "starting gamecat");

  let client = Client::new(&config)?;

  let page = client
    .load_page(&config.page)
    .await
    .with_context(|| format!("could not load page from {}", config.page))?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, config.page, page);

  let result = app.run(&mut terminal);

  app.shutdown();

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
