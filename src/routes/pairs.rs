use actix_web::{web, HttpResponse, Responder};
use std::collections::BTreeMap;
use std::sync::Arc;
use validator::Validate;
use crate::config::RankingSettings;
use crate::core::{CategoricalTrait, PairRanker, DEFAULT_TRAIT_SCORE};
use crate::models::{
    BirdRecord, ErrorResponse, HealthResponse, RankCsvQuery, RankPairsRequest, RankPairsResponse,
    TargetTraits, TraitCatalogResponse, TraitValue,
};
use crate::services::{check_ids, parse_roster_csv, PortraitResolver};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Sample roster loaded at startup, read-only afterwards
    pub roster: Arc<Vec<BirdRecord>>,
    pub ranker: PairRanker,
    pub targets: TargetTraits,
    pub portraits: Arc<PortraitResolver>,
    pub ranking: RankingSettings,
}

/// Configure all pair-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/traits", web::get().to(trait_catalog))
        .route("/pairs/rank", web::post().to(rank_pairs))
        .route("/pairs/rank/csv", web::post().to(rank_pairs_csv));
}

fn error_response(status: actix_web::http::StatusCode, error: &str, message: String) -> HttpResponse {
    HttpResponse::build(status).json(ErrorResponse {
        error: error.to_string(),
        message,
        status_code: status.as_u16(),
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        roster_size: state.roster.len(),
    })
}

/// Trait catalog endpoint
///
/// GET /api/v1/traits
///
/// Lists the known categorical values with their scores, plus the default
/// targets and weights a client form should start from.
async fn trait_catalog(state: web::Data<AppState>) -> impl Responder {
    let vocabularies: BTreeMap<String, Vec<TraitValue>> = CategoricalTrait::ALL
        .iter()
        .map(|trait_kind| {
            let values = trait_kind
                .vocabulary()
                .iter()
                .map(|(value, score)| TraitValue {
                    value: value.to_string(),
                    score: *score,
                })
                .collect();
            (trait_kind.name().to_string(), values)
        })
        .collect();

    HttpResponse::Ok().json(TraitCatalogResponse {
        vocabularies,
        default_score: DEFAULT_TRAIT_SCORE,
        targets: state.targets.clone(),
        weights: *state.ranker.weights(),
    })
}

/// Rank pairs endpoint
///
/// POST /api/v1/pairs/rank
///
/// Request body:
/// ```json
/// {
///   "birds": [{"id": "M1", "gender": "male", "color": "white", "head": "long",
///              "feather": "smooth", "weight": 400, "power": 9, "health": 9}],
///   "targets": {"weight": 400},
///   "weights": {"color": 0.3, "weight": 0.2, "head": 0.1,
///               "feather": 0.1, "power": 0.2, "health": 0.1},
///   "limit": 20
/// }
/// ```
async fn rank_pairs(
    state: web::Data<AppState>,
    req: web::Json<RankPairsRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_pairs request: {:?}", errors);
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let req = req.into_inner();

    let birds = match req.birds {
        Some(birds) => {
            if let Err(e) = check_ids(&birds) {
                return error_response(
                    actix_web::http::StatusCode::BAD_REQUEST,
                    "Invalid roster",
                    e.to_string(),
                );
            }
            Arc::new(birds)
        }
        None => state.roster.clone(),
    };

    let ranker = match req.weights {
        Some(weights) => PairRanker::new(weights),
        None => state.ranker.clone(),
    };
    let targets = req.targets.unwrap_or_else(|| state.targets.clone());

    run_ranking(&state, birds, ranker, &targets, req.limit).await
}

/// Rank pairs from an uploaded CSV roster
///
/// POST /api/v1/pairs/rank/csv?limit=20
///
/// The body is a CSV file with the header
/// `id,gender,color,weight,head,feather,power,health,image_path`.
/// Default targets and weights apply.
async fn rank_pairs_csv(
    state: web::Data<AppState>,
    query: web::Query<RankCsvQuery>,
    body: web::Bytes,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        return error_response(
            actix_web::http::StatusCode::BAD_REQUEST,
            "Validation failed",
            errors.to_string(),
        );
    }

    let birds = match parse_roster_csv(body.as_ref()) {
        Ok(birds) => birds,
        Err(e) => {
            tracing::info!("Rejected uploaded roster: {}", e);
            return error_response(
                actix_web::http::StatusCode::BAD_REQUEST,
                "Invalid roster",
                e.to_string(),
            );
        }
    };

    let targets = state.targets.clone();
    run_ranking(&state, Arc::new(birds), state.ranker.clone(), &targets, query.limit).await
}

/// Rank a roster off the async workers and build the response
async fn run_ranking(
    state: &AppState,
    birds: Arc<Vec<BirdRecord>>,
    ranker: PairRanker,
    targets: &TargetTraits,
    limit: Option<u16>,
) -> HttpResponse {
    if birds.len() > state.ranking.max_birds {
        return error_response(
            actix_web::http::StatusCode::PAYLOAD_TOO_LARGE,
            "Roster too large",
            format!("Roster has {} birds, at most {} are accepted", birds.len(), state.ranking.max_birds),
        );
    }

    let limit = limit
        .unwrap_or(state.ranking.default_limit)
        .min(state.ranking.max_limit) as usize;
    let run_id = uuid::Uuid::new_v4().to_string();
    let target_weight = targets.weight;
    let portraits = state.portraits.clone();

    tracing::info!(
        "Ranking run {}: {} birds, target weight {}, limit {}",
        run_id,
        birds.len(),
        target_weight,
        limit
    );

    let outcome = tokio::task::spawn_blocking(move || {
        let result = ranker.rank_roster(&birds, target_weight);
        let best_pair = result.best().map(|pair| portraits.best_pair_view(pair));
        (result, best_pair)
    })
    .await;

    let (result, best_pair) = match outcome {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Ranking run {} failed: {}", run_id, e);
            return error_response(
                actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Ranking failed",
                e.to_string(),
            );
        }
    };

    let response = RankPairsResponse {
        run_id: run_id.clone(),
        pairs: result.top(limit).to_vec(),
        best_pair,
        total_birds: result.total_birds,
        sires: result.sires,
        dams: result.dams,
        unassigned: result.unassigned,
        total_pairs: result.pairs.len(),
    };

    tracing::info!(
        "Ranking run {} returning {} of {} pairs",
        run_id,
        response.pairs.len(),
        response.total_pairs
    );

    HttpResponse::Ok().json(response)
}
