//! セッションゲート
//!
//! ログイン状態は永続領域の1フラグのみ。ゲートは読むだけで、
//! フラグを立てるのはログイン画面 (`sign_in`) の役割。

use crate::error::Result;
use crate::store::{KeyValueStore, SESSION_ACTIVE_VALUE, SESSION_KEY};

/// 画面遷移先
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Scheme(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard/citizen".to_string(),
            Route::Scheme(id) => format!("/schemes/{}", id),
        }
    }
}

/// ゲート付き処理の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Gated<T> {
    /// ゲート通過、処理結果
    Open(T),
    /// 未ログイン。処理は行わず遷移のみ
    Redirect(Route),
}

impl<T> Gated<T> {
    pub fn is_redirect(&self) -> bool {
        matches!(self, Gated::Redirect(_))
    }

    pub fn open(self) -> Option<T> {
        match self {
            Gated::Open(value) => Some(value),
            Gated::Redirect(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Gated<U> {
        match self {
            Gated::Open(value) => Gated::Open(f(value)),
            Gated::Redirect(route) => Gated::Redirect(route),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionGate<B> {
    backend: B,
}

impl<B: KeyValueStore> SessionGate<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// フラグがログイン中の値と一致するか
    pub fn is_active(&self) -> bool {
        self.backend.get(SESSION_KEY).as_deref() == Some(SESSION_ACTIVE_VALUE)
    }

    /// ゲートを評価する。未ログインならログイン画面へのリダイレクト
    pub fn check(&self) -> Gated<()> {
        if self.is_active() {
            Gated::Open(())
        } else {
            tracing::debug!("session inactive, redirecting to login");
            Gated::Redirect(Route::Login)
        }
    }
}

/// ログイン画面からセッションフラグを立てる
pub fn sign_in<B: KeyValueStore>(backend: &B) -> Result<()> {
    backend.set(SESSION_KEY, SESSION_ACTIVE_VALUE)
}

pub fn sign_out<B: KeyValueStore>(backend: &B) -> Result<()> {
    backend.remove(SESSION_KEY)
}
