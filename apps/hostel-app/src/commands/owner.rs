//! # Owner Commands
//!
//! Commands behind the owner dashboard and the bed management screen.
//!
//! ## Bed Grid Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Bed Management                                       │
//! │                                                                         │
//! │  manage_listing("1")                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────┐                           │
//! │  │ Sunrise Hostel        4 of 10 available  │                           │
//! │  │ [1●][2●][3●][4●][5●][6●][7○][8○][9○][10○]│   ● occupied  ○ vacant    │
//! │  └──────────────────────────────────────────┘                           │
//! │       │ open_bed("bed-1-7")         │ open_bed("bed-1-2")              │
//! │       ▼                             ▼                                   │
//! │  Assign dialog                 Remove dialog                            │
//! │  assign_tenant(name, phone)    remove_tenant()                          │
//! │       │                             │                                   │
//! │       └─────────────┬───────────────┘                                   │
//! │                     ▼                                                   │
//! │          toast + grid refresh; dialog closes                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use hostel_core::validation::ListingForm;
use hostel_core::{Bed, BedDialog, BedDialogMode, CoreError, ListingView, Role};
use hostel_store::HostelStore;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::ListingCard;
use crate::error::{ApiError, ApiResult, ErrorCode};
use crate::router::Route;
use crate::state::{AppConfig, NavState, NoticeState, OwnerScreenState, SessionContext, SessionState};

// =============================================================================
// Response Types
// =============================================================================

/// The owner's landing screen.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnerDashboard {
    pub username: String,
    pub listings: Vec<ListingCard>,
}

/// An open bed dialog with its display text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedDialogView {
    #[serde(flatten)]
    pub dialog: BedDialog,
    pub title: String,
    pub description: String,
}

impl From<BedDialog> for BedDialogView {
    fn from(dialog: BedDialog) -> Self {
        BedDialogView {
            title: dialog.title(),
            description: dialog.description(),
            dialog,
        }
    }
}

/// The bed grid of one hostel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BedManagement {
    pub listing: ListingCard,
    pub beds: Vec<Bed>,
    /// "4 of 10 beds available"
    pub summary: String,
    pub dialog: Option<BedDialogView>,
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageListingArgs {
    pub listing_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenBedArgs {
    pub bed_id: String,
}

/// Assign form contents. `bed_id` defaults to the open dialog's bed.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AssignTenantArgs {
    pub bed_id: Option<String>,
    pub tenant_name: String,
    pub tenant_phone: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoveTenantArgs {
    pub bed_id: Option<String>,
}

// =============================================================================
// Helpers
// =============================================================================

/// The hostel on the bed management screen.
fn managed_listing(screen: &OwnerScreenState) -> ApiResult<String> {
    screen
        .with_screen(|s| s.managed_listing.clone())
        .ok_or_else(|| ApiError::new(ErrorCode::BusinessLogic, "No hostel selected"))
}

/// Explicit bed id, else the bed of the open dialog.
fn target_bed(screen: &OwnerScreenState, explicit: Option<String>) -> ApiResult<String> {
    explicit
        .or_else(|| screen.with_screen(|s| s.dialog.as_ref().map(|d| d.bed_id.clone())))
        .ok_or_else(|| ApiError::validation("No bed selected"))
}

fn bed_management(
    store: &HostelStore,
    config: &AppConfig,
    screen: &OwnerScreenState,
    listing_id: &str,
) -> ApiResult<BedManagement> {
    // One roster snapshot feeds the card, the grid and the summary.
    let roster = store.roster(listing_id)?;
    let view = ListingView::new(store.listings().get(listing_id)?, &roster);

    Ok(BedManagement {
        listing: ListingCard::new(view, Role::Owner, config),
        beds: roster.beds().to_vec(),
        summary: roster.summary(),
        dialog: screen.with_screen(|s| s.dialog.clone().map(BedDialogView::from)),
    })
}

fn dashboard(
    store: &HostelStore,
    config: &AppConfig,
    ctx: &SessionContext,
) -> ApiResult<OwnerDashboard> {
    let listings = store
        .views_owned_by(ctx.username())?
        .into_iter()
        .map(|view| ListingCard::new(view, Role::Owner, config))
        .collect();

    Ok(OwnerDashboard {
        username: ctx.username().to_string(),
        listings,
    })
}

// =============================================================================
// Commands
// =============================================================================

/// Opens the owner dashboard: the hostels this owner manages.
pub fn owner_dashboard(
    store: &HostelStore,
    sessions: &SessionState,
    nav: &NavState,
    config: &AppConfig,
) -> ApiResult<OwnerDashboard> {
    debug!("owner_dashboard command");
    let ctx = sessions.require(Role::Owner)?;
    nav.go(Route::OwnerDashboard);
    dashboard(store, config, &ctx)
}

/// Adds a hostel from the "Add New Hostel" form.
///
/// ## Validation Order
/// 1. name, location, price, total beds present
/// 2. price is a positive whole number
/// 3. total beds is a positive whole number
///
/// The first failure is reported and nothing is stored.
pub fn add_listing(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    notices: &NoticeState,
    form: ListingForm,
) -> ApiResult<ListingCard> {
    debug!(name = %form.name, "add_listing command");
    let ctx = sessions.require(Role::Owner)?;

    let mut new = form.validate().map_err(|e| {
        warn!(error = %e, "Rejected new hostel form");
        CoreError::from(e)
    })?;
    if form.image.trim().is_empty() {
        new.image = config.placeholder_image.clone();
    }

    let view = store.create_listing(new, ctx.username())?;
    notices.success("New hostel added successfully!");
    Ok(ListingCard::new(view, Role::Owner, config))
}

/// Switches to the bed grid of a hostel.
pub fn manage_listing(
    store: &HostelStore,
    sessions: &SessionState,
    nav: &NavState,
    config: &AppConfig,
    screen: &OwnerScreenState,
    args: ManageListingArgs,
) -> ApiResult<BedManagement> {
    debug!(listing_id = %args.listing_id, "manage_listing command");
    sessions.require(Role::Owner)?;

    // Unknown ids fail before the screen changes.
    store.view(&args.listing_id)?;
    screen.with_screen_mut(|s| s.manage(&args.listing_id));

    let management = bed_management(store, config, screen, &args.listing_id)?;
    nav.go(Route::ManageBeds);
    Ok(management)
}

/// Clicks a bed: assign dialog when vacant, remove dialog when occupied.
pub fn open_bed(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    screen: &OwnerScreenState,
    args: OpenBedArgs,
) -> ApiResult<BedManagement> {
    debug!(bed_id = %args.bed_id, "open_bed command");
    sessions.require(Role::Owner)?;
    let listing_id = managed_listing(screen)?;

    let dialog = store.bed_dialog(&listing_id, &args.bed_id)?;
    screen.with_screen_mut(|s| s.dialog = Some(dialog));
    bed_management(store, config, screen, &listing_id)
}

/// Submits the assign dialog.
///
/// On a validation failure the dialog stays open holding what was typed.
/// Occupied beds are refused with a business error.
pub fn assign_tenant(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    notices: &NoticeState,
    screen: &OwnerScreenState,
    args: AssignTenantArgs,
) -> ApiResult<BedManagement> {
    debug!("assign_tenant command");
    sessions.require(Role::Owner)?;
    let listing_id = managed_listing(screen)?;
    let bed_id = target_bed(screen, args.bed_id)?;

    screen.with_screen_mut(|s| {
        let open_assign = s
            .dialog
            .as_mut()
            .filter(|d| d.bed_id == bed_id && d.mode == BedDialogMode::Assign);
        if let Some(dialog) = open_assign {
            dialog.tenant_name = args.tenant_name.clone();
            dialog.tenant_phone = args.tenant_phone.clone();
        }
    });

    let (event, _) =
        store.assign_tenant(&listing_id, &bed_id, &args.tenant_name, &args.tenant_phone)?;

    info!(listing_id = %listing_id, bed_id = %bed_id, "Tenant assigned");
    screen.with_screen_mut(|s| s.dialog = None);
    notices.success(event.to_string());
    bed_management(store, config, screen, &listing_id)
}

/// Confirms the remove dialog. Vacating an already vacant bed succeeds.
pub fn remove_tenant(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    notices: &NoticeState,
    screen: &OwnerScreenState,
    args: RemoveTenantArgs,
) -> ApiResult<BedManagement> {
    debug!("remove_tenant command");
    sessions.require(Role::Owner)?;
    let listing_id = managed_listing(screen)?;
    let bed_id = target_bed(screen, args.bed_id)?;

    let (event, _) = store.remove_tenant(&listing_id, &bed_id)?;

    info!(listing_id = %listing_id, bed_id = %bed_id, "Tenant removed");
    screen.with_screen_mut(|s| s.dialog = None);
    notices.success(event.to_string());
    bed_management(store, config, screen, &listing_id)
}

/// Appends a vacant bed to the managed hostel.
pub fn add_bed(
    store: &HostelStore,
    sessions: &SessionState,
    config: &AppConfig,
    notices: &NoticeState,
    screen: &OwnerScreenState,
) -> ApiResult<BedManagement> {
    debug!("add_bed command");
    sessions.require(Role::Owner)?;
    let listing_id = managed_listing(screen)?;

    let (event, roster) = store.add_bed(&listing_id)?;

    info!(listing_id = %listing_id, beds = roster.total(), "Bed added");
    notices.success(event.to_string());
    bed_management(store, config, screen, &listing_id)
}

/// "Back to dashboard" from the bed grid.
pub fn close_bed_management(
    store: &HostelStore,
    sessions: &SessionState,
    nav: &NavState,
    config: &AppConfig,
    screen: &OwnerScreenState,
) -> ApiResult<OwnerDashboard> {
    debug!("close_bed_management command");
    let ctx = sessions.require(Role::Owner)?;
    screen.with_screen_mut(|s| s.close());
    nav.go(Route::OwnerDashboard);
    dashboard(store, config, &ctx)
}

/// Closes the bed dialog without changing anything.
pub fn close_bed_dialog(screen: &OwnerScreenState) {
    screen.with_screen_mut(|s| s.dialog = None);
}
