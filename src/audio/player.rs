use super::SoundPlayer;
use crate::core::error::{AudioError, AudioResult};
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

/// 基于 rodio 的音效播放器
///
/// 音效文件整体读入内存，每次 `restart` 停掉当前的 sink 并新建一个从头播放。
pub struct RodioSoundPlayer {
    stream: OutputStream,
    sink: Option<Sink>,
    sound: Arc<[u8]>,
    volume: f32,
}

impl RodioSoundPlayer {
    /// 打开默认输出设备并加载音效
    pub fn open<P: AsRef<Path>>(path: P, volume: f32) -> AudioResult<Self> {
        let path = path.as_ref();
        let sound: Arc<[u8]> = fs::read(path)
            .map_err(|source| AudioError::Load {
                path: path.display().to_string(),
                source,
            })?
            .into();

        // 先确认能解码，避免每次爆炸都报同一个错
        Decoder::new(Cursor::new(Arc::clone(&sound)))
            .map_err(|e| AudioError::Decode(e.to_string()))?;

        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| AudioError::NoDevice(e.to_string()))?;

        Ok(Self {
            stream,
            sink: None,
            sound,
            volume,
        })
    }
}

impl SoundPlayer for RodioSoundPlayer {
    fn restart(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }

        match Decoder::new(Cursor::new(Arc::clone(&self.sound))) {
            Ok(source) => {
                let sink = Sink::connect_new(self.stream.mixer());
                sink.set_volume(self.volume);
                sink.append(source);
                self.sink = Some(sink);
            }
            Err(e) => {
                tracing::warn!(target: "audio", "Failed to decode explosion sound: {}", e);
            }
        }
    }
}
