//! # Tenant Commands
//!
//! Browsing, searching and booking.
//!
//! ## Booking Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Booking Flow                                         │
//! │                                                                         │
//! │  ┌──────────┐ select  ┌──────────┐ book_now ┌──────────┐ confirm ┌──────┐│
//! │  │ Browsing │────────►│ Details  │─────────►│ Confirm  │────────►│Booked││
//! │  └──────────┘         │ Shown    │◄─────────│ Pending  │         └──────┘│
//! │       ▲               └──────────┘  cancel  └──────────┘            │   │
//! │       │                    │ 0 beds → toast, stays                  │   │
//! │       └──────── dismiss (from anywhere) ────────────────────────────┘   │
//! │                                                                         │
//! │  confirm_booking waits on the booking gateway, then takes one bed.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::booking::BOOKING_CONFIRMED;
use hostel_core::filter::{KNOWN_AMENITIES, KNOWN_LOCATIONS};
use hostel_core::{filter_listings, BookingState, CoreError, PriceRange, Role, SearchFilters};
use hostel_store::HostelStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::ListingCard;
use crate::error::ApiResult;
use crate::gateway::BookingGateway;
use crate::router::Route;
use crate::state::{AppConfig, NavState, NoticeState, SessionState, TenantScreenState};

// =============================================================================
// Response Types
// =============================================================================

/// Where the booking dialog stands, with the listing it is about.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingView {
    pub booking: BookingState,
    pub listing: Option<ListingCard>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TenantDashboard {
    pub username: String,
    pub listings: Vec<ListingCard>,
    pub booking: BookingView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub filters: SearchFilters,
    pub count: usize,
    pub results: Vec<ListingCard>,
    /// Options for the location dropdown.
    pub locations: Vec<&'static str>,
    /// Options for the amenity checkboxes.
    pub amenities: Vec<&'static str>,
    pub booking: BookingView,
}

// =============================================================================
// Arguments
// =============================================================================

/// Changes to the search criteria. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchArgs {
    pub query: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<[u32; 2]>,
    /// Replaces the whole amenity set.
    pub amenities: Option<Vec<String>>,
    /// Adds the tag if absent, removes it if present.
    pub toggle_amenity: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectListingArgs {
    pub listing_id: String,
}

// =============================================================================
// Helpers
// =============================================================================

fn booking_view(
    store: &HostelStore,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<BookingView> {
    let booking = screen.with_screen(|s| s.booking.state().clone());
    let listing = match booking.listing_id() {
        Some(id) => Some(ListingCard::new(store.view(id)?, Role::Tenant, config)),
        None => None,
    };
    Ok(BookingView { booking, listing })
}

fn search_results(
    store: &HostelStore,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<SearchResults> {
    let filters = screen.with_screen(|s| s.filters.clone());
    let results: Vec<ListingCard> = filter_listings(&store.views()?, &filters)
        .into_iter()
        .map(|view| ListingCard::new(view, Role::Tenant, config))
        .collect();

    Ok(SearchResults {
        count: results.len(),
        filters,
        results,
        locations: KNOWN_LOCATIONS.to_vec(),
        amenities: KNOWN_AMENITIES.to_vec(),
        booking: booking_view(store, config, screen)?,
    })
}

// =============================================================================
// Commands
// =============================================================================

/// Opens the tenant dashboard with every hostel.
pub fn tenant_dashboard(
    store: &HostelStore,
    sessions: &SessionState,
    nav: &NavState,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<TenantDashboard> {
    debug!("tenant_dashboard command");
    let ctx = sessions.require(Role::Tenant)?;
    nav.go(Route::TenantDashboard);

    let listings = store
        .views()?
        .into_iter()
        .map(|view| ListingCard::new(view, Role::Tenant, config))
        .collect();

    Ok(TenantDashboard {
        username: ctx.username().to_string(),
        listings,
        booking: booking_view(store, config, screen)?,
    })
}

/// Updates the search criteria and re-runs the filter.
///
/// An inverted price range is rejected and leaves every criterion as it
/// was.
pub fn search(
    store: &HostelStore,
    sessions: &SessionState,
    nav: &NavState,
    config: &AppConfig,
    screen: &TenantScreenState,
    args: SearchArgs,
) -> ApiResult<SearchResults> {
    debug!(?args, "search command");
    sessions.require(Role::Tenant)?;
    nav.go(Route::Search);

    let price_range = args
        .price_range
        .map(|[min, max]| PriceRange::new(min, max))
        .transpose()
        .map_err(CoreError::from)?;

    screen.with_screen_mut(|s| {
        let filters = &mut s.filters;
        if let Some(query) = args.query {
            filters.query = query;
        }
        if let Some(location) = args.location {
            filters.location = location;
        }
        if let Some(range) = price_range {
            filters.price_range = range;
        }
        if let Some(amenities) = args.amenities {
            filters.amenities = amenities;
        }
        if let Some(tag) = args.toggle_amenity {
            filters.toggle_amenity(&tag);
        }
    });

    search_results(store, config, screen)
}

/// "Clear Filters": back to the default criteria.
pub fn clear_filters(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<SearchResults> {
    debug!("clear_filters command");
    sessions.require(Role::Tenant)?;
    screen.with_screen_mut(|s| s.clear_filters());
    search_results(store, config, screen)
}

/// Opens the details dialog of a hostel.
pub fn select_listing(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    screen: &TenantScreenState,
    args: SelectListingArgs,
) -> ApiResult<BookingView> {
    debug!(listing_id = %args.listing_id, "select_listing command");
    sessions.require(Role::Tenant)?;

    store.view(&args.listing_id)?;
    screen.with_screen_mut(|s| s.booking.select(&args.listing_id))?;
    booking_view(store, config, screen)
}

/// "Book Now" in the details dialog. Refused when no bed is free.
pub fn book_now(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<BookingView> {
    debug!("book_now command");
    sessions.require(Role::Tenant)?;

    let state = screen.with_screen(|s| s.booking.state().clone());
    let listing_id = state.listing_id().ok_or_else(|| CoreError::InvalidTransition {
        state: state.to_string(),
        action: "book".to_string(),
    })?;

    let view = store.view(listing_id)?;
    screen
        .with_screen_mut(|s| s.booking.book_now(&view))
        .inspect_err(|e| warn!(listing_id, error = %e, "Book Now refused"))?;

    booking_view(store, config, screen)
}

/// Backs out of the confirmation step.
pub fn cancel_booking(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<BookingView> {
    debug!("cancel_booking command");
    sessions.require(Role::Tenant)?;
    screen.with_screen_mut(|s| s.booking.cancel())?;
    booking_view(store, config, screen)
}

/// Confirms the pending booking.
///
/// ## Sequence
/// ```text
/// ConfirmPending ──► gateway.submit (delay) ──► consume one bed ──► Booked
///                          │
///                          └── failure: stays ConfirmPending, error toast
/// ```
pub async fn confirm_booking<B: BookingGateway>(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    notices: &NoticeState,
    screen: &TenantScreenState,
    gateway: &B,
) -> ApiResult<BookingView> {
    debug!("confirm_booking command");
    let ctx = sessions.require(Role::Tenant)?;

    let listing_id = screen.with_screen(|s| s.booking.pending().map(str::to_string))?;

    gateway.submit(&listing_id).await?;

    let view = store.consume_bed(&listing_id, ctx.username())?;
    screen.with_screen_mut(|s| s.booking.complete())?;

    info!(
        listing_id = %listing_id,
        username = ctx.username(),
        available = view.available_beds,
        "Booking confirmed"
    );
    notices.success(BOOKING_CONFIRMED);
    booking_view(store, config, screen)
}

/// Closes the details dialog from any step.
pub fn dismiss_booking(
    store: &HostelStore,
    config: &AppConfig,
    screen: &TenantScreenState,
) -> ApiResult<BookingView> {
    screen.with_screen_mut(|s| s.booking.dismiss());
    booking_view(store, config, screen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, ErrorCode};
    use crate::gateway::SimulatedBooking;
    use hostel_core::{NoticeLevel, Session};
    use std::time::Duration;

    struct Fixture {
        store: HostelStore,
        sessions: SessionState,
        nav: NavState,
        config: AppConfig,
        notices: NoticeState,
        screen: TenantScreenState,
    }

    fn signed_in_tenant() -> Fixture {
        let sessions = SessionState::in_memory();
        sessions
            .sign_in(&Session::new(Role::Tenant, "tenant"))
            .unwrap();
        Fixture {
            store: HostelStore::seeded(),
            sessions,
            nav: NavState::new(),
            config: AppConfig::default(),
            notices: NoticeState::new(),
            screen: TenantScreenState::default(),
        }
    }

    fn run_search(f: &Fixture, args: SearchArgs) -> ApiResult<SearchResults> {
        search(&f.store, &f.sessions, &f.nav, &f.config, &f.screen, args)
    }

    fn select(f: &Fixture, id: &str) -> ApiResult<BookingView> {
        select_listing(
            &f.store,
            &f.sessions,
            &f.config,
            &f.screen,
            SelectListingArgs {
                listing_id: id.into(),
            },
        )
    }

    struct RejectingBooking;

    impl BookingGateway for RejectingBooking {
        async fn submit(&self, _listing_id: &str) -> ApiResult<()> {
            Err(ApiError::internal("Booking service unavailable"))
        }
    }

    #[test]
    fn test_dashboard_shows_all_hostels() {
        let f = signed_in_tenant();
        let dash = tenant_dashboard(&f.store, &f.sessions, &f.nav, &f.config, &f.screen).unwrap();

        assert_eq!(dash.listings.len(), 6);
        assert_eq!(dash.listings[0].action_label, "Book Now");
        assert_eq!(dash.listings[5].action_label, "View Details");
        assert_eq!(dash.listings[0].price_label, "₹500");
        assert_eq!(dash.booking.booking, BookingState::Browsing);
    }

    #[test]
    fn test_default_search_returns_everything_in_order() {
        let f = signed_in_tenant();
        let results = run_search(&f, SearchArgs::default()).unwrap();

        let ids: Vec<&str> = results.results.iter().map(|c| c.view.id()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5", "6"]);
        assert_eq!(f.nav.current(), Route::Search);
    }

    #[test]
    fn test_search_combines_criteria() {
        let f = signed_in_tenant();
        run_search(
            &f,
            SearchArgs {
                location: Some("Delhi".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let results = run_search(
            &f,
            SearchArgs {
                price_range: Some([450, 2000]),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(results.count, 1);
        assert_eq!(results.results[0].view.listing.name, "Sunrise Hostel");
    }

    #[test]
    fn test_toggle_amenity_and_clear() {
        let f = signed_in_tenant();
        let with_tag = run_search(
            &f,
            SearchArgs {
                toggle_amenity: Some("Study Room".into()),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(with_tag.filters.amenities, ["Study Room"]);
        assert!(with_tag.count < 6);

        let cleared = clear_filters(&f.store, &f.sessions, &f.config, &f.screen).unwrap();
        assert_eq!(cleared.filters, SearchFilters::default());
        assert_eq!(cleared.count, 6);
    }

    #[test]
    fn test_inverted_price_range_rejected() {
        let f = signed_in_tenant();
        let err = run_search(
            &f,
            SearchArgs {
                query: Some("hostel".into()),
                price_range: Some([900, 300]),
                ..Default::default()
            },
        )
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        f.screen
            .with_screen(|s| assert_eq!(s.filters, SearchFilters::default()));
    }

    #[test]
    fn test_book_now_without_beds() {
        let f = signed_in_tenant();
        select(&f, "6").unwrap();

        let err = book_now(&f.store, &f.sessions, &f.config, &f.screen).unwrap_err();

        assert_eq!(err.message, "No beds available at this hostel");
        f.screen.with_screen(|s| {
            assert_eq!(
                s.booking.state(),
                &BookingState::DetailsShown {
                    listing_id: "6".into()
                }
            )
        });
    }

    #[test]
    fn test_book_now_needs_selection() {
        let f = signed_in_tenant();
        let err = book_now(&f.store, &f.sessions, &f.config, &f.screen).unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_cancel_returns_to_details() {
        let f = signed_in_tenant();
        select(&f, "1").unwrap();
        book_now(&f.store, &f.sessions, &f.config, &f.screen).unwrap();

        let view = cancel_booking(&f.store, &f.sessions, &f.config, &f.screen).unwrap();
        assert!(matches!(view.booking, BookingState::DetailsShown { .. }));
    }

    #[tokio::test(start_paused = true)]
    async fn test_confirm_takes_one_bed() {
        let f = signed_in_tenant();
        select(&f, "1").unwrap();
        book_now(&f.store, &f.sessions, &f.config, &f.screen).unwrap();

        let gateway = SimulatedBooking::new(Duration::from_millis(1500));
        let view = confirm_booking(&f.store, &f.sessions, &f.config, &f.notices, &f.screen, &gateway)
            .await
            .unwrap();

        assert_eq!(
            view.booking,
            BookingState::Booked {
                listing_id: "1".into()
            }
        );
        assert_eq!(view.listing.unwrap().view.available_beds, 3);

        let notice = &f.notices.drain()[0];
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, "Booking confirmed! Check your email for details.");

        // The owner's grid counts the booking too.
        assert_eq!(f.store.views_owned_by("owner").unwrap()[0].available_beds, 3);
        let bed = f.store.roster("1").unwrap().get("bed-1-7").cloned().unwrap();
        assert_eq!(bed.tenant_name(), Some("tenant"));
    }

    #[tokio::test]
    async fn test_failed_submission_keeps_pending() {
        let f = signed_in_tenant();
        select(&f, "2").unwrap();
        book_now(&f.store, &f.sessions, &f.config, &f.screen).unwrap();

        let err = confirm_booking(
            &f.store,
            &f.sessions,
            &f.config,
            &f.notices,
            &f.screen,
            &RejectingBooking,
        )
        .await
        .unwrap_err();

        assert_eq!(err.code, ErrorCode::Internal);
        assert_eq!(f.store.view("2").unwrap().available_beds, 2);
        f.screen
            .with_screen(|s| assert!(s.booking.pending().is_ok()));
    }

    #[tokio::test]
    async fn test_confirm_without_pending_booking() {
        let f = signed_in_tenant();
        let gateway = SimulatedBooking::new(Duration::ZERO);
        let err = confirm_booking(&f.store, &f.sessions, &f.config, &f.notices, &f.screen, &gateway)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::BusinessLogic);
    }

    #[test]
    fn test_dismiss_from_any_state() {
        let f = signed_in_tenant();
        select(&f, "1").unwrap();
        book_now(&f.store, &f.sessions, &f.config, &f.screen).unwrap();

        let view = dismiss_booking(&f.store, &f.config, &f.screen).unwrap();
        assert_eq!(view.booking, BookingState::Browsing);
        assert!(view.listing.is_none());
    }

    #[test]
    fn test_owner_cannot_search() {
        let f = signed_in_tenant();
        f.sessions
            .sign_in(&Session::new(Role::Owner, "owner"))
            .unwrap();
        let err = run_search(&f, SearchArgs::default()).unwrap_err();
        assert_eq!(err.code, ErrorCode::Unauthorized);
    }
}
