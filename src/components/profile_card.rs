use leptos::prelude::*;

use super::risk_badge::RiskBadge;
use crate::model::Profile;

/// One record from the intelligence store, rendered as a card.
#[component]
pub fn ProfileCard(profile: Profile) -> impl IntoView {
	let tags = profile
		.tags
		.iter()
		.map(|tag| view! { <span class="profile-tag">{tag.clone()}</span> })
		.collect_view();

	view! {
		<div class="profile-card" class:profile-card-flagged=profile.is_flagged>
			<img class="profile-avatar" src=profile.avatar.clone() alt=profile.handle.clone() />
			<div class="profile-body">
				<div class="profile-header">
					<span class="profile-handle">"@" {profile.handle.clone()}</span>
					<span class="profile-platform">{profile.platform.as_str()}</span>
					<RiskBadge level=profile.risk_level />
				</div>
				<p class="profile-bio">{profile.bio.clone()}</p>
				<div class="profile-counts">
					<span>{profile.follower_count} " followers"</span>
					<span>{profile.following_count} " following"</span>
					<span>{profile.post_count} " posts"</span>
					<span class="profile-score">"risk " {profile.risk_score} "/100"</span>
				</div>
				<div class="profile-tags">{tags}</div>
				<div class="profile-signature">
					<span class="profile-signature-id">{profile.behavioral_signature.clone()}</span>
					<span class="profile-detected">"detected " {profile.detected_at.clone()}</span>
				</div>
			</div>
		</div>
	}
}
