//! カメラキャプチャモジュール
//!
//! ライフサイクル: `Initializing → Ready → Released`（失敗時は`Error`）。
//! デバイスストリームはスコープ付きリソースとして扱う:
//! 画面入場で取得、退出で必ず解放。取得待ちの間に退出した場合も、
//! 遅れて届いたストリームは束縛せず即座に停止する。

use crate::acquisition::ImagePayload;
use crate::error::{BeautyAiError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::RgbImage;
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

/// カメラの向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Front,
    Back,
}

/// カメラ取得パラメータ
#[derive(Debug, Clone)]
pub struct CameraConfig {
    pub facing: Facing,
    pub ideal_width: u32,
    pub ideal_height: u32,
    pub audio: bool,
}

impl Default for CameraConfig {
    fn default() -> Self {
        // セルフィー用: 前面カメラ・正方形720px・音声なし
        Self {
            facing: Facing::Front,
            ideal_width: 720,
            ideal_height: 720,
            audio: false,
        }
    }
}

/// カメラセッションの状態
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraState {
    /// 未入場
    Idle,
    /// ストリーム取得中
    Initializing,
    /// 最初のフレームが取得可能（キャプチャ許可）
    Ready,
    /// 解放済み
    Released,
    /// 取得失敗（ユーザー向けメッセージ付き、自動リトライなし）
    Error(String),
}

/// デバイスストリーム
pub trait CameraStream: Send {
    /// 現在のフレームを取得（最初のデコード可能フレームが出るまでNone）
    fn frame(&mut self) -> Result<Option<RgbImage>>;

    /// ストリームを停止（全トラック停止に相当）
    fn stop(&mut self);
}

/// カメラバックエンド（デバイス取得の抽象）
#[allow(async_fn_in_trait)]
pub trait CameraBackend {
    type Stream: CameraStream;

    async fn open(&self, config: &CameraConfig) -> Result<Self::Stream>;
}

struct Inner<S> {
    state: CameraState,
    stream: Option<S>,
    /// 取得競合の検出用。enter/leaveごとに加算し、
    /// 古い世代のopen完了は束縛せず破棄する。
    generation: u64,
}

/// カメラセッション（取得・キャプチャ・解放の管理）
pub struct CameraSession<B: CameraBackend> {
    backend: B,
    config: CameraConfig,
    inner: Mutex<Inner<B::Stream>>,
}

impl<B: CameraBackend> CameraSession<B> {
    pub fn new(backend: B, config: CameraConfig) -> Self {
        Self {
            backend,
            config,
            inner: Mutex::new(Inner {
                state: CameraState::Idle,
                stream: None,
                generation: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<B::Stream>> {
        // ポイズンはテスト内パニック由来のみ。中身をそのまま使う
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self) -> CameraState {
        self.lock().state.clone()
    }

    pub fn is_ready(&self) -> bool {
        self.lock().state == CameraState::Ready
    }

    /// カメラ画面に入場してストリームを取得する
    ///
    /// 前回のストリームが残っていれば先に停止する。
    /// 取得完了時に世代が進んでいた場合（取得待ち中にleaveや再入場が
    /// あった場合）、届いたストリームは停止して捨てる。
    pub async fn enter(&self) -> Result<()> {
        let my_generation = {
            let mut inner = self.lock();
            if let Some(mut stale) = inner.stream.take() {
                stale.stop();
            }
            inner.state = CameraState::Initializing;
            inner.generation += 1;
            inner.generation
        };

        match self.backend.open(&self.config).await {
            Ok(stream) => {
                let mut inner = self.lock();
                if inner.generation != my_generation {
                    // 取得待ちの間に退出済み。束縛せず即停止
                    let mut stream = stream;
                    stream.stop();
                    return Ok(());
                }
                inner.stream = Some(stream);
                inner.state = CameraState::Ready;
                Ok(())
            }
            Err(e) => {
                let mut inner = self.lock();
                if inner.generation == my_generation {
                    inner.state = CameraState::Error(e.to_string());
                }
                Err(e)
            }
        }
    }

    /// カメラ画面から退出してストリームを解放する
    ///
    /// どの状態からでも呼べる。取得待ち中に呼ばれた場合は世代を進め、
    /// 遅延到着ストリームを`enter`側で破棄させる。
    pub fn leave(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        if let Some(mut stream) = inner.stream.take() {
            stream.stop();
        }
        inner.state = CameraState::Released;
    }

    /// 現在のフレームをキャプチャしてJPEGペイロード化する
    ///
    /// プレビューと同じ見た目になるよう左右反転してからエンコードする。
    /// Ready前（ストリーム未取得・最初のフレーム未到着）の呼び出しは
    /// no-opとして`Ok(None)`を返す。
    pub fn capture(&self) -> Result<Option<ImagePayload>> {
        let mut inner = self.lock();
        if inner.state != CameraState::Ready {
            return Ok(None);
        }
        let Some(stream) = inner.stream.as_mut() else {
            return Ok(None);
        };

        match stream.frame()? {
            Some(frame) => encode_mirrored_jpeg(&frame).map(Some),
            None => Ok(None),
        }
    }
}

/// フレームを左右反転してJPEG化（ミラープレビューと一致させる）
fn encode_mirrored_jpeg(frame: &RgbImage) -> Result<ImagePayload> {
    let mirrored = image::imageops::flip_horizontal(frame);

    let mut buf = Vec::new();
    mirrored
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .map_err(|e| BeautyAiError::Camera(format!("JPEGエンコードエラー: {}", e)))?;

    Ok(ImagePayload::new(BASE64.encode(&buf), "image/jpeg"))
}

// =============================================
// ffmpegバックエンド（v4l2デバイスからの1フレーム取得）
// =============================================

/// ffmpeg経由のキャプチャバックエンド
///
/// ストリーミングは保持せず、フレーム要求ごとにffmpegを1回起動する。
pub struct FfmpegBackend {
    pub device: String,
}

impl Default for FfmpegBackend {
    fn default() -> Self {
        Self {
            device: "/dev/video0".into(),
        }
    }
}

impl CameraBackend for FfmpegBackend {
    type Stream = FfmpegStream;

    async fn open(&self, config: &CameraConfig) -> Result<FfmpegStream> {
        // ffmpegの存在確認
        let probe = tokio::process::Command::new("ffmpeg")
            .arg("-version")
            .output()
            .await;
        if probe.is_err() {
            return Err(BeautyAiError::Camera(
                "ffmpegが見つかりません。インストールしてください".into(),
            ));
        }

        // デバイスの存在確認（権限・ハードウェア障害はここで顕在化）
        if !Path::new(&self.device).exists() {
            return Err(BeautyAiError::Camera(format!(
                "カメラデバイスが見つかりません: {}",
                self.device
            )));
        }

        Ok(FfmpegStream {
            device: self.device.clone(),
            width: config.ideal_width,
            height: config.ideal_height,
            stopped: false,
        })
    }
}

pub struct FfmpegStream {
    device: String,
    width: u32,
    height: u32,
    stopped: bool,
}

impl CameraStream for FfmpegStream {
    fn frame(&mut self) -> Result<Option<RgbImage>> {
        if self.stopped {
            return Ok(None);
        }

        let output = std::process::Command::new("ffmpeg")
            .args([
                "-hide_banner",
                "-loglevel",
                "error",
                "-f",
                "v4l2",
                "-video_size",
                &format!("{}x{}", self.width, self.height),
                "-i",
                &self.device,
                "-frames:v",
                "1",
                "-f",
                "image2pipe",
                "-vcodec",
                "mjpeg",
                "-",
            ])
            .output()
            .map_err(|e| BeautyAiError::Camera(format!("ffmpeg実行エラー: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(BeautyAiError::Camera(format!(
                "フレーム取得失敗 (code {:?}): {}",
                output.status.code(),
                stderr
            )));
        }

        let image = image::load_from_memory_with_format(&output.stdout, image::ImageFormat::Jpeg)
            .map_err(|e| BeautyAiError::Camera(format!("フレームデコードエラー: {}", e)))?;

        Ok(Some(image.to_rgb8()))
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}
