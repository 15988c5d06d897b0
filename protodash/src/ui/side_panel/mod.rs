use crate::app::Dashboard;
use egui::RichText;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Home,
    Balances,
    Transactions,
    Directory,
    ProductCatalog,
    Payments,
    Billing,
    Reporting,
    Connect,
    ConnectedAccounts,
    EmbeddedFinance,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Home,
        Route::Balances,
        Route::Transactions,
        Route::Directory,
        Route::ProductCatalog,
        Route::Payments,
        Route::Billing,
        Route::Reporting,
        Route::Connect,
        Route::ConnectedAccounts,
        Route::EmbeddedFinance,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Balances => "Balances",
            Route::Transactions => "Transactions",
            Route::Directory => "Directory",
            Route::ProductCatalog => "Product catalog",
            Route::Payments => "Payments",
            Route::Billing => "Billing",
            Route::Reporting => "Reporting",
            Route::Connect => "Connect",
            Route::ConnectedAccounts => "Connected accounts",
            Route::EmbeddedFinance => "Embedded finance",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Balances => "/balances",
            Route::Transactions => "/transactions",
            Route::Directory => "/directory",
            Route::ProductCatalog => "/product-catalog",
            Route::Payments => "/payments",
            Route::Billing => "/billing",
            Route::Reporting => "/reporting",
            Route::Connect => "/connect",
            Route::ConnectedAccounts => "/connect/accounts",
            Route::EmbeddedFinance => "/embedded-finance",
        }
    }

    /// Sub pages are listed indented under their parent.
    fn is_nested(self) -> bool {
        self.path().matches('/').count() > 1
    }
}

#[derive(Debug, Clone)]
pub struct SidePanel {
    pub show: bool,
}

impl SidePanel {
    pub fn new(is_show: bool) -> Self {
        Self { show: is_show }
    }
}

impl SidePanel {
    pub const DEFAULT_WIDTH: f32 = 220.0;
    pub const MIN_WIDTH: f32 = 180.0;
    pub const MAX_WIDTH: f32 = 300.0;
}

impl Dashboard {
    pub fn navigation(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.label(RichText::new("Navigation").small().weak());
        ui.separator();

        for route in Route::ALL {
            ui.horizontal(|ui| {
                if route.is_nested() {
                    ui.add_space(16.0);
                }
                let selected = self.opts.active_route == route;
                if ui.selectable_label(selected, route.label()).clicked() && !selected {
                    tracing::debug!(path = route.path(), "navigate");
                    self.opts.active_route = route;
                }
            });
        }
    }
}
