//! アプリケーション状態機械
//!
//! 4状態（home / camera / loading / results）の遷移を管理する。
//! 遷移:
//! - home → camera（セルフィー選択） / loading（ファイル選択）
//! - camera → loading（キャプチャ） / home（戻る）
//! - loading → results（成功、結果必須） / home（失敗、エラーメッセージ付き）
//! - results → home（最初から、結果とエラーを破棄）
//!
//! 解析中の多重起動は拒否する。また実行トークンにより、
//! 画面遷移後に遅れて完了した解析結果は無視される。

use crate::error::{BeautyAiError, Result};
use crate::types::AnalysisResult;

/// 画面状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Home,
    Camera,
    Loading,
    Results,
}

/// 解析実行の生存トークン
///
/// loading入場ごとに発行され、完了報告が現在の実行に対するものか
/// 判定するのに使う。古いトークンでの完了は破棄される。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunToken(u64);

/// アプリケーション状態コンテナ
///
/// 描画側へは不変スナップショット（参照）として渡す。永続化はしない。
pub struct App {
    state: AppState,
    result: Option<AnalysisResult>,
    error: Option<String>,
    run: u64,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            state: AppState::Home,
            result: None,
            error: None,
            run: 0,
        }
    }

    pub fn state(&self) -> AppState {
        self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// home → camera（セルフィー選択）
    pub fn take_selfie(&mut self) -> Result<()> {
        if self.state != AppState::Home {
            return Err(BeautyAiError::Transition(format!(
                "{:?} からカメラへは遷移できません",
                self.state
            )));
        }
        self.state = AppState::Camera;
        self.error = None;
        Ok(())
    }

    /// home|camera → loading（解析開始）
    ///
    /// 解析中の多重起動は拒否する。
    pub fn begin_analysis(&mut self) -> Result<RunToken> {
        match self.state {
            AppState::Home | AppState::Camera => {
                self.state = AppState::Loading;
                self.error = None;
                self.run += 1;
                Ok(RunToken(self.run))
            }
            AppState::Loading => Err(BeautyAiError::Transition(
                "解析が既に実行中です".into(),
            )),
            AppState::Results => Err(BeautyAiError::Transition(
                "results から解析は開始できません".into(),
            )),
        }
    }

    /// loading → results（成功）
    ///
    /// トークンが現在の実行と一致しない場合（遅延完了）は何もせず
    /// falseを返す。resultsには必ず結果を伴って入る。
    pub fn finish_analysis(&mut self, token: RunToken, result: AnalysisResult) -> bool {
        if self.state != AppState::Loading || token.0 != self.run {
            return false;
        }
        self.result = Some(result);
        self.state = AppState::Results;
        true
    }

    /// loading → home（失敗、エラーメッセージ付き）
    pub fn fail_analysis(&mut self, token: RunToken, message: impl Into<String>) -> bool {
        if self.state != AppState::Loading || token.0 != self.run {
            return false;
        }
        self.error = Some(message.into());
        self.result = None;
        self.state = AppState::Home;
        true
    }

    /// 任意の状態 → home（戻る／最初から）
    ///
    /// 結果とエラーを破棄する。実行中の解析があればその完了は
    /// 以後トークン不一致で無視される。
    pub fn back_to_home(&mut self) {
        self.run += 1;
        self.state = AppState::Home;
        self.result = None;
        self.error = None;
    }
}
