use iced::widget::image::Handle;
use iced::widget::{column, container, row, scrollable, text, Column};
use iced::{event, window, Alignment, Element, Event, Length, Size, Subscription, Task, Theme};
use rfd::FileDialog;
use std::path::PathBuf;
use tracing::{debug, info, warn};

mod error;
mod media;
mod notify;
mod state;
mod stats;
mod ui;
mod validate;

use error::PressError;
use media::{compressor, format, loader};
use notify::Notifier;
use state::quality::Quality;
use state::session::{CompressedArtifact, SelectedFile, Session};

/// Main application state
struct PixPress {
    /// The active file and its latest compressed output
    session: Session,
    /// Quality percentage driven by the slider
    quality: Quality,
    /// Transient error banner
    notifier: Notifier,
    /// Decoded preview of the original upload
    original_preview: Option<Handle>,
    /// Decoded preview of the latest artifact
    compressed_preview: Option<Handle>,
    /// Whether a file is currently dragged over the window
    drop_hover: bool,
    /// Sequence number of the most recently issued compress request
    compress_seq: u64,
    /// Highest sequence number whose completion has been seen; results
    /// below it are superseded and dropped
    compress_done_seq: u64,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User clicked the intake area
    BrowseRequested,
    /// A dragged file entered or left the window
    FileHovering(bool),
    /// A file was dropped onto the window
    FileDropped(PathBuf),
    /// Background file intake completed
    FileLoaded(Result<SelectedFile, PressError>),
    /// User moved the quality slider
    QualityChanged(u8),
    /// Background re-encode completed, tagged with its request sequence
    CompressDone(u64, Result<CompressedArtifact, PressError>),
    /// User clicked the download button
    DownloadRequested,
    /// Background artifact write completed
    DownloadDone(Result<PathBuf, PressError>),
    /// A notification auto-hide timer fired
    NoticeExpired(u64),
}

impl PixPress {
    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        info!("🗜️ Pix Press initialized");
        (
            PixPress {
                session: Session::new(),
                quality: Quality::default(),
                notifier: Notifier::new(),
                original_preview: None,
                compressed_preview: None,
                drop_hover: false,
                compress_seq: 0,
                compress_done_seq: 0,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::BrowseRequested => {
                // Show the native file picker dialog
                let picked = FileDialog::new()
                    .set_title("Choose an image to compress")
                    .add_filter("PNG / JPEG images", &["png", "jpg", "jpeg"])
                    .pick_file();

                match picked {
                    Some(path) => Task::perform(loader::load_file(path), Message::FileLoaded),
                    None => Task::none(),
                }
            }

            Message::FileHovering(hovering) => {
                self.drop_hover = hovering;
                Task::none()
            }

            Message::FileDropped(path) => {
                self.drop_hover = false;
                Task::perform(loader::load_file(path), Message::FileLoaded)
            }

            Message::FileLoaded(Ok(file)) => {
                debug!(name = %file.name, media_type = %file.media_type, "session file replaced");
                self.notifier.hide();
                self.original_preview = Some(Handle::from_bytes((*file.bytes).clone()));
                self.compressed_preview = None;

                // Anything still in flight belongs to the previous file
                self.compress_done_seq = self.compress_seq;
                self.session.accept(file);

                self.start_compress()
            }

            Message::FileLoaded(Err(error)) => self.notify(error),

            Message::QualityChanged(percent) => {
                self.quality = Quality::new(percent);
                if self.session.is_loaded() {
                    self.start_compress()
                } else {
                    Task::none()
                }
            }

            Message::CompressDone(seq, result) => {
                if seq <= self.compress_done_seq {
                    debug!(
                        seq,
                        latest = self.compress_done_seq,
                        "discarding superseded compress result"
                    );
                    return Task::none();
                }
                self.compress_done_seq = seq;

                match result {
                    Ok(artifact) => {
                        info!(
                            size = artifact.size,
                            quality = self.quality.percent(),
                            "compressed artifact ready"
                        );
                        self.compressed_preview =
                            Some(Handle::from_bytes(artifact.bytes.clone()));
                        self.session.set_artifact(artifact);
                        Task::none()
                    }
                    Err(error) => self.notify(error),
                }
            }

            Message::DownloadRequested => {
                // Copy out what the save needs before the dialog blocks
                let request = self
                    .session
                    .file()
                    .zip(self.session.artifact())
                    .map(|(file, artifact)| {
                        (
                            format::download_file_name(&file.name, artifact.format),
                            artifact.bytes.clone(),
                        )
                    });

                let Some((suggested, bytes)) = request else {
                    return self.notify(PressError::NoArtifact);
                };

                let Some(target) = FileDialog::new()
                    .set_title("Save compressed image")
                    .set_file_name(&suggested)
                    .save_file()
                else {
                    return Task::none();
                };

                Task::perform(
                    async move {
                        tokio::fs::write(&target, bytes)
                            .await
                            .map(|_| target)
                            .map_err(|e| PressError::Io(e.to_string()))
                    },
                    Message::DownloadDone,
                )
            }

            Message::DownloadDone(Ok(path)) => {
                info!(path = %path.display(), "artifact saved");
                Task::none()
            }

            Message::DownloadDone(Err(error)) => self.notify(error),

            Message::NoticeExpired(generation) => {
                self.notifier.expire(generation);
                Task::none()
            }
        }
    }

    /// Launch a re-encode of the current file at the current quality.
    ///
    /// Requests are tagged with a fresh sequence number; completions are
    /// applied in [`update`] only while their number is the highest seen,
    /// so a slow older encode can never overwrite a newer one.
    fn start_compress(&mut self) -> Task<Message> {
        let Some(file) = self.session.file() else {
            return Task::none();
        };

        self.compress_seq += 1;
        let seq = self.compress_seq;
        let bytes = file.bytes.clone();
        let format = file.format;
        let quality = self.quality;

        Task::perform(compressor::compress(bytes, format, quality), move |result| {
            Message::CompressDone(seq, result)
        })
    }

    /// Surface an error in the banner and schedule its auto-hide.
    fn notify(&mut self, error: PressError) -> Task<Message> {
        warn!(%error, "pipeline error surfaced to user");
        let generation = self.notifier.show(error.to_string());

        Task::perform(
            async move {
                tokio::time::sleep(notify::AUTO_HIDE).await;
                generation
            },
            Message::NoticeExpired,
        )
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let mut content: Column<Message> = column![
            text("Pix Press").size(40),
            text("Compress PNG and JPEG images right on your machine").size(16),
            ui::drop_zone(self.drop_hover),
        ]
        .spacing(20)
        .padding(30)
        .align_x(Alignment::Center);

        if let Some(file) = self.session.file() {
            content = content.push(ui::quality_control(self.quality));

            let original = ui::preview_card(
                "Original",
                self.original_preview.as_ref(),
                vec![("Size", stats::format_size(file.size))],
            );

            // Statistics are derived fresh from the sizes on every render
            let compressed = match self.session.artifact() {
                Some(artifact) => {
                    let derived = stats::derive(file.size, artifact.size);
                    ui::preview_card(
                        "Compressed",
                        self.compressed_preview.as_ref(),
                        vec![
                            ("Size", derived.compressed_size),
                            ("Reduced by", derived.ratio),
                            ("Space saved", derived.saved),
                        ],
                    )
                }
                None => ui::preview_card("Compressed", None, Vec::new()),
            };

            content = content.push(row![original, compressed].spacing(20));
            content = content.push(ui::download_button());
        }

        if let Some(message) = self.notifier.message() {
            content = content.push(ui::error_banner(message));
        }

        scrollable(
            container(content)
                .width(Length::Fill)
                .center_x(Length::Fill),
        )
        .into()
    }

    /// Forward window-level drag-and-drop events into messages
    fn subscription(&self) -> Subscription<Message> {
        event::listen_with(|event, _status, _window| match event {
            Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovering(true)),
            Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHovering(false)),
            Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pix_press=info")),
        )
        .init();

    iced::application("Pix Press", PixPress::update, PixPress::view)
        .subscription(PixPress::subscription)
        .theme(PixPress::theme)
        .window_size(Size::new(960.0, 760.0))
        .centered()
        .run_with(PixPress::new)
}
