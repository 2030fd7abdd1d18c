use std::sync::Arc;

use crate::adapters::{FFmpegAdapter, FFprobeAdapter, LocalFsAdapter, Settings};
use crate::app::normalize_interactor::NormalizeInteractor;
use crate::ports::{FsPort, ProbePort, TranscodePort};

pub trait AppContainer: Send + Sync {
    fn normalize_interactor(&self) -> Arc<NormalizeInteractor>;
    fn fs_port(&self) -> Arc<dyn FsPort>;
}

pub struct DefaultAppContainer {
    normalize_interactor: Arc<NormalizeInteractor>,
    fs_port: Arc<dyn FsPort>,
}

impl DefaultAppContainer {
    pub fn new(settings: &Settings, dry_run: bool) -> Self {
        let probe_port = Arc::new(FFprobeAdapter::new(settings.tools.ffprobe.clone()));
        let transcode_port = Arc::new(FFmpegAdapter::new(settings.tools.ffmpeg.clone()));
        let fs_port: Arc<dyn FsPort> = Arc::new(LocalFsAdapter::new());

        let normalize_interactor = Arc::new(NormalizeInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            transcode_port as Arc<dyn TranscodePort>,
            Arc::clone(&fs_port),
            settings.profile.clone(),
            dry_run,
        ));

        Self {
            normalize_interactor,
            fs_port,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn normalize_interactor(&self) -> Arc<NormalizeInteractor> {
        Arc::clone(&self.normalize_interactor)
    }

    fn fs_port(&self) -> Arc<dyn FsPort> {
        Arc::clone(&self.fs_port)
    }
}
