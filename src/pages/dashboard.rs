#![allow(non_snake_case)]

use std::time::Duration;

use dioxus::{logger::tracing::{error, warn}, prelude::*};
use futures_util::StreamExt;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::components::guard::RequireAuth;
use crate::utils::{
  i18n,
  locale::use_lang,
  server::{self, AppError, TradeRequest, TradeSide},
  session::SessionStore,
};

const TRADE_SYMBOL: &str = "BTC-USD";
const SECONDARY_SYMBOL: &str = "IAM";
const PRICE_POLL_SECS: u64 = 5;
// Simulated market friction applied on top of the quoted price.
const SLIPPAGE_RATE: Decimal = dec!(0.001);

enum TradeAction {
  Buy,
  Sell,
}

#[component]
pub fn Dashboard() -> Element {
  rsx! {
    RequireAuth {
      DashboardView { }
    }
  }
}

#[component]
fn DashboardView() -> Element {
  static CSS: Asset = asset!("assets/dash.css");

  let lang = use_lang();
  let t = i18n::t(lang());
  let mut btc_price: Signal<Option<Decimal>> = use_signal(|| None);
  let mut iam_price: Signal<Option<Decimal>> = use_signal(|| None);
  let mut amount = use_signal(|| "1".to_string());
  let mut trade_error = use_signal(String::new);
  let mut loading_trade = use_signal(|| false);
  let mut equity: Signal<Decimal> = use_signal(|| dec!(50000));

  // Quote poll. Each tick fires the pair without waiting for the previous
  // one; whichever response lands last wins. The task dies with the view.
  use_future(move || async move {
    loop {
      spawn(async move {
        let (btc, iam) = futures::join!(
          server::fetch_price(TRADE_SYMBOL),
          server::fetch_price(SECONDARY_SYMBOL)
        );
        match btc {
          Ok(quote) => btc_price.set(Some(quote.price)),
          // Keep showing the last known quote.
          Err(e) => warn!("{} quote failed: {}", TRADE_SYMBOL, e),
        }
        match iam {
          Ok(quote) => iam_price.set(Some(quote.price)),
          Err(e) => warn!("{} quote failed: {}", SECONDARY_SYMBOL, e),
        }
      });
      async_std::task::sleep(Duration::from_secs(PRICE_POLL_SECS)).await;
    }
  });

  // React to order clicks
  let trade_client = use_coroutine(move |mut rx| async move {
    while let Some(action) = rx.next().await {
      loading_trade.set(true);
      trade_error.set(String::new());

      let side = match action {
        TradeAction::Buy => TradeSide::Buy,
        TradeAction::Sell => TradeSide::Sell,
      };
      let open_price = (*btc_price.peek()).unwrap_or(dec!(50000));
      let close_price = match side {
        TradeSide::Buy => open_price + open_price * SLIPPAGE_RATE,
        TradeSide::Sell => open_price - open_price * SLIPPAGE_RATE,
      };
      let quantity = amount
        .peek()
        .parse::<Decimal>()
        .ok()
        .filter(|q| q.is_sign_positive() && !q.is_zero())
        .unwrap_or(dec!(1));

      let payload = TradeRequest {
        challenge_id: SessionStore::browser().challenge_id(),
        symbol: TRADE_SYMBOL.to_string(),
        side,
        quantity,
        open_price,
        close_price,
      };
      match server::submit_trade(&payload).await {
        Ok(response) => {
          if let Some(challenge) = response.challenge {
            equity.set(challenge.current_equity);
          }
        }
        Err(e @ AppError::ApiError { .. }) => {
          let message = e
            .server_message()
            .unwrap_or(i18n::t(*lang.peek()).dash_trade_error)
            .to_string();
          trade_error.set(message);
        }
        Err(e) => {
          error!("trade submit failed: {}", e);
          trade_error.set(i18n::t(*lang.peek()).dash_backend_error.to_string());
        }
      }
      loading_trade.set(false);
    }
  });

  let tv_locale = lang().as_str();
  let iam_display = match iam_price() {
    Some(price) => format!("{} DH", price.round_dp(2)),
    None => "—".to_string(),
  };

  rsx! {
    document::Stylesheet { href: CSS },
    div {
      class: "dash-page",
      onmounted: move |_evt| {
        // The chart is a third-party widget; its script is injected once and
        // initialized against the container below.
        document::eval(&format!(r#"
        function initTradingView() {{
          new window.TradingView.widget({{
            autosize: true,
            symbol: 'BINANCE:BTCUSDT',
            interval: '60',
            timezone: 'Etc/UTC',
            theme: 'dark',
            style: '1',
            locale: '{tv_locale}',
            enable_publishing: false,
            hide_top_toolbar: false,
            hide_legend: false,
            container_id: 'tv-widget'
          }});
        }}
        if (window.TradingView && window.TradingView.widget) {{
          initTradingView();
        }} else {{
          const scriptElem = document.createElement('script');
          scriptElem.src = 'https://s3.tradingview.com/tv.js';
          scriptElem.async = true;
          scriptElem.onload = initTradingView;
          scriptElem.onerror = function() {{
            console.error('Error loading the TradingView script');
          }};
          document.body.appendChild(scriptElem);
        }}
        "#));
      },
      div {
        class: "stat-grid",
        div {
          class: "stat-card",
          div { class: "stat-label", "{t.dash_balance}" }
          div { class: "stat-value", "{equity} DH" }
        }
        div {
          class: "stat-card",
          div { class: "stat-label", "{t.dash_daily_loss}" }
          div { class: "stat-value", "5%" }
        }
        div {
          class: "stat-card",
          div { class: "stat-label", "{t.dash_profit_target}" }
          div { class: "stat-value", "10%" }
        }
      }
      div {
        class: "ticker-strip",
        span { class: "ticker-label", "{t.dash_iam}" }
        span { class: "ticker-value", "{iam_display}" }
      }
      div {
        class: "dash-grid",
        div {
          class: "chart-panel",
          div { id: "tv-widget" }
        }
        div {
          class: "side-panel",
          div {
            class: "action-panel",
            div { class: "panel-title", "{t.dash_action_panel}" }
            div {
              class: "form-group",
              label { class: "form-label", "{t.dash_amount}" }
              input {
                class: "form-input",
                r#type: "number",
                min: "1",
                value: "{amount}",
                oninput: move |evt| amount.set(evt.value()),
              }
            }
            div {
              class: "order-buttons",
              button {
                class: "button button-buy",
                disabled: loading_trade(),
                onclick: move |_| trade_client.send(TradeAction::Buy),
                "{t.dash_buy}"
              }
              button {
                class: "button button-sell",
                disabled: loading_trade(),
                onclick: move |_| trade_client.send(TradeAction::Sell),
                "{t.dash_sell}"
              }
            }
            if !trade_error().is_empty() {
              div { class: "banner banner-error", "{trade_error}" }
            }
          }
          div {
            class: "ai-panel",
            div { class: "panel-title", "{t.dash_ai_title}" }
            p { "{t.dash_ai_text}" }
          }
        }
      }
    }
  }
}
