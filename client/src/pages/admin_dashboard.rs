//! Admin role home: platform stats, revenue breakdown and moderation tables.
//!
//! SYSTEM CONTEXT
//! ==============
//! The six admin reads are issued together and applied all-or-nothing: one
//! failed read leaves the previous snapshot in place and raises a single
//! error toast. Deletes always pass through `ConfirmDialog` and are followed
//! by a full reload.

#[cfg(test)]
#[path = "admin_dashboard_test.rs"]
mod admin_dashboard_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::loading_screen::LoadingScreen;
use crate::components::navbar::Navbar;
use crate::components::stat_card::StatCard;
use crate::components::toast_host::notify;
use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AdminDashboard, AdminUser, Booking, RevenueStats, Review, Role, Transaction};
use crate::state::toast::{Notice, ToastState};
use crate::util::format::{booking_cost, date_only, humanize, money};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load dashboard data";

/// One consistent snapshot of everything the admin page shows.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AdminData {
    pub dashboard: AdminDashboard,
    pub users: Vec<AdminUser>,
    pub bookings: Vec<Booking>,
    pub transactions: Vec<Transaction>,
    pub revenue: RevenueStats,
    pub reviews: Vec<Review>,
}

impl AdminData {
    /// Combine the six reads; the first failure wins.
    pub fn assemble(
        dashboard: Result<AdminDashboard, ApiError>,
        users: Result<Vec<AdminUser>, ApiError>,
        bookings: Result<Vec<Booking>, ApiError>,
        transactions: Result<Vec<Transaction>, ApiError>,
        revenue: Result<RevenueStats, ApiError>,
        reviews: Result<Vec<Review>, ApiError>,
    ) -> Result<Self, ApiError> {
        Ok(Self {
            dashboard: dashboard?,
            users: users?,
            bookings: bookings?,
            transactions: transactions?,
            revenue: revenue?,
            reviews: reviews?,
        })
    }

    pub fn transaction_count(&self) -> i64 {
        self.revenue.service_transactions + self.revenue.parts_transactions
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminTab {
    Users,
    Bookings,
    Transactions,
    Reviews,
}

impl AdminTab {
    pub const ALL: [Self; 4] = [Self::Users, Self::Bookings, Self::Transactions, Self::Reviews];

    pub fn label(self) -> &'static str {
        match self {
            Self::Users => "Users",
            Self::Bookings => "Bookings",
            Self::Transactions => "Transactions",
            Self::Reviews => "Reviews",
        }
    }
}

/// A destructive action waiting for confirmation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PendingDelete {
    User { id: String, name: String },
    Review { id: String, reviewer: String },
}

impl PendingDelete {
    pub fn title(&self) -> &'static str {
        match self {
            Self::User { .. } => "Delete User",
            Self::Review { .. } => "Delete Review",
        }
    }

    pub fn prompt(&self) -> String {
        match self {
            Self::User { name, .. } => format!("Are you sure you want to delete {name}? This cannot be undone."),
            Self::Review { reviewer, .. } => {
                format!("Are you sure you want to delete the review by {reviewer}? This cannot be undone.")
            }
        }
    }

    fn messages(&self) -> (&'static str, &'static str) {
        match self {
            Self::User { .. } => ("User deleted", "Failed to delete user"),
            Self::Review { .. } => ("Review deleted", "Failed to delete review"),
        }
    }
}

/// Admin accounts cannot be deleted from the console.
pub fn can_delete(user: &AdminUser) -> bool {
    user.role != Role::Admin
}

async fn fetch_admin_data() -> Result<AdminData, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let (dashboard, users, bookings, transactions, revenue, reviews) = futures::join!(
            api::admin_dashboard(),
            api::admin_users(),
            api::admin_bookings(),
            api::admin_transactions(),
            api::admin_revenue_stats(),
            api::admin_reviews(),
        );
        AdminData::assemble(dashboard, users, bookings, transactions, revenue, reviews)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

fn load(data: RwSignal<AdminData>, loading: RwSignal<bool>, toasts: RwSignal<ToastState>) {
    leptos::task::spawn_local(async move {
        match fetch_admin_data().await {
            Ok(snapshot) => data.set(snapshot),
            Err(e) => {
                log::error!("admin dashboard load failed: {e}");
                notify(toasts, Notice::error(LOAD_FAILED_MESSAGE));
            }
        }
        loading.set(false);
    });
}

fn confirm_delete(
    target: PendingDelete,
    data: RwSignal<AdminData>,
    loading: RwSignal<bool>,
    toasts: RwSignal<ToastState>,
) {
    let (ok, failed) = target.messages();
    leptos::task::spawn_local(async move {
        let result = match &target {
            PendingDelete::User { id, .. } => api::delete_user(id).await,
            PendingDelete::Review { id, .. } => api::delete_review(id).await,
        };
        match result {
            Ok(()) => {
                notify(toasts, Notice::success(ok));
                load(data, loading, toasts);
            }
            Err(e) => {
                log::warn!("{} failed: {e}", target.title());
                notify(toasts, Notice::error(failed));
            }
        }
    });
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let data = RwSignal::new(AdminData::default());
    let loading = RwSignal::new(true);
    let tab = RwSignal::new(AdminTab::Users);
    let pending = RwSignal::new(None::<PendingDelete>);

    #[cfg(feature = "hydrate")]
    load(data, loading, toasts);

    let stat = move |pick: fn(&AdminData) -> String| Signal::derive(move || data.with(pick));

    let on_confirm = Callback::new(move |()| {
        if let Some(target) = pending.get_untracked() {
            pending.set(None);
            confirm_delete(target, data, loading, toasts);
        }
    });
    let on_cancel = Callback::new(move |()| pending.set(None));

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <LoadingScreen message="Loading admin dashboard..." /> }
        >
            <div class="app-page admin-dashboard" data-testid="admin-dashboard">
                <Navbar />
                <main class="app-page__main">
                    <header class="app-page__header">
                        <div>
                            <h1 data-testid="admin-title">"Admin Dashboard"</h1>
                            <p>"Manage your platform and monitor revenue"</p>
                        </div>
                    </header>

                    <section class="stat-grid">
                        <StatCard label="Platform Revenue" value=stat(|d| money(d.dashboard.stats.platform_revenue)) />
                        <StatCard label="Total Transactions" value=stat(|d| money(d.dashboard.stats.total_revenue)) />
                        <StatCard label="Total Users" value=stat(|d| d.dashboard.stats.total_users.to_string()) />
                        <StatCard label="Technicians" value=stat(|d| d.dashboard.stats.total_technicians.to_string()) />
                        <StatCard label="Bookings" value=stat(|d| d.dashboard.stats.total_bookings.to_string()) />
                        <StatCard label="Parts Listed" value=stat(|d| d.dashboard.stats.total_parts.to_string()) />
                    </section>

                    <section class="panel revenue-breakdown">
                        <h2>"Revenue Breakdown"</h2>
                        {move || {
                            let revenue = data.with(|d| d.revenue.clone());
                            let total = data.with(AdminData::transaction_count);
                            view! {
                                <div class="revenue-breakdown__grid">
                                    <div class="revenue-breakdown__card">
                                        <h3>"Service Bookings"</h3>
                                        <p>"Total Revenue: " {money(revenue.service_revenue)}</p>
                                        <p>
                                            {format!("Platform Commission ({}): ", revenue.service_commission_rate)}
                                            {money(revenue.service_commission)}
                                        </p>
                                        <p>"Transactions: " {revenue.service_transactions}</p>
                                    </div>
                                    <div class="revenue-breakdown__card">
                                        <h3>"Parts Sales"</h3>
                                        <p>"Total Revenue: " {money(revenue.parts_revenue)}</p>
                                        <p>
                                            {format!("Platform Commission ({}): ", revenue.parts_commission_rate)}
                                            {money(revenue.parts_commission)}
                                        </p>
                                        <p>"Transactions: " {revenue.parts_transactions}</p>
                                    </div>
                                </div>
                                <p class="revenue-breakdown__total">{format!("{total} paid transactions")}</p>
                            }
                        }}
                    </section>

                    <nav class="tabs" role="tablist">
                        {AdminTab::ALL
                            .into_iter()
                            .map(|t| {
                                view! {
                                    <button
                                        class=move || {
                                            if tab.get() == t { "tabs__tab tabs__tab--active" } else { "tabs__tab" }
                                        }
                                        role="tab"
                                        on:click=move |_| tab.set(t)
                                    >
                                        {t.label()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </nav>

                    <section class="panel">
                        {move || match tab.get() {
                            AdminTab::Users => view! { <UsersTable data=data pending=pending /> }.into_any(),
                            AdminTab::Bookings => view! { <BookingsTable data=data /> }.into_any(),
                            AdminTab::Transactions => view! { <TransactionsTable data=data /> }.into_any(),
                            AdminTab::Reviews => view! { <ReviewsTable data=data pending=pending /> }.into_any(),
                        }}
                    </section>
                </main>

                <Show when=move || pending.with(Option::is_some)>
                    <ConfirmDialog
                        title=pending.get_untracked().map_or("Delete", |p| p.title())
                        message=Signal::derive(move || pending.with(|p| p.as_ref().map(PendingDelete::prompt).unwrap_or_default()))
                        on_confirm=on_confirm
                        on_cancel=on_cancel
                    />
                </Show>
            </div>
        </Show>
    }
}

#[component]
fn UsersTable(data: RwSignal<AdminData>, pending: RwSignal<Option<PendingDelete>>) -> impl IntoView {
    view! {
        <table class="admin-table" data-testid="users-table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Role"</th>
                    <th>"Location"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    data.with(|d| d.users.clone())
                        .into_iter()
                        .map(|user| {
                            let action = can_delete(&user).then(|| {
                                let target = PendingDelete::User { id: user.id.clone(), name: user.name.clone() };
                                view! {
                                    <button
                                        class="btn btn--danger"
                                        data-testid="delete-user-btn"
                                        on:click=move |_| pending.set(Some(target.clone()))
                                    >
                                        "Delete"
                                    </button>
                                }
                            });
                            view! {
                                <tr>
                                    <td>{user.name}</td>
                                    <td>{user.email}</td>
                                    <td>
                                        <span class=format!("role-badge role-badge--{}", user.role.as_str())>
                                            {user.role.as_str()}
                                        </span>
                                    </td>
                                    <td>{user.location.unwrap_or_else(|| "N/A".to_owned())}</td>
                                    <td>{action}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn BookingsTable(data: RwSignal<AdminData>) -> impl IntoView {
    view! {
        <table class="admin-table" data-testid="bookings-table">
            <thead>
                <tr>
                    <th>"Service Type"</th>
                    <th>"Equipment"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                    <th>"Cost"</th>
                    <th>"Payment"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    data.with(|d| d.bookings.clone())
                        .into_iter()
                        .map(|booking| {
                            let cost = booking_cost(&booking);
                            view! {
                                <tr>
                                    <td>{humanize(&booking.service_type)}</td>
                                    <td>{booking.equipment_details.name}</td>
                                    <td>{booking.location}</td>
                                    <td>{humanize(booking.status.as_str())}</td>
                                    <td>{cost}</td>
                                    <td>{humanize(booking.payment_status.as_deref().unwrap_or("pending"))}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn TransactionsTable(data: RwSignal<AdminData>) -> impl IntoView {
    view! {
        <table class="admin-table" data-testid="transactions-table">
            <thead>
                <tr>
                    <th>"Type"</th>
                    <th>"Amount"</th>
                    <th>"Commission"</th>
                    <th>"Status"</th>
                    <th>"Date"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    data.with(|d| d.transactions.clone())
                        .into_iter()
                        .map(|tx| {
                            let date = date_only(&tx.created_at).to_owned();
                            view! {
                                <tr>
                                    <td>{humanize(&tx.transaction_type)}</td>
                                    <td>{money(tx.amount)}</td>
                                    <td>{money(tx.platform_commission.unwrap_or(0.0))}</td>
                                    <td>{humanize(&tx.payment_status)}</td>
                                    <td>{date}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}

#[component]
fn ReviewsTable(data: RwSignal<AdminData>, pending: RwSignal<Option<PendingDelete>>) -> impl IntoView {
    view! {
        <table class="admin-table" data-testid="reviews-table">
            <thead>
                <tr>
                    <th>"Reviewer"</th>
                    <th>"Target Type"</th>
                    <th>"Rating"</th>
                    <th>"Comment"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    data.with(|d| d.reviews.clone())
                        .into_iter()
                        .map(|review| {
                            let target = PendingDelete::Review {
                                id: review.id.clone(),
                                reviewer: review.reviewer_name.clone(),
                            };
                            view! {
                                <tr>
                                    <td>{review.reviewer_name}</td>
                                    <td>{humanize(&review.target_type)}</td>
                                    <td>{format!("★ {:.1}", review.rating)}</td>
                                    <td>{review.comment}</td>
                                    <td>
                                        <button
                                            class="btn btn--danger"
                                            data-testid="delete-review-btn"
                                            on:click=move |_| pending.set(Some(target.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </tbody>
        </table>
    }
}
