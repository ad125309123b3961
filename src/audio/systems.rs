use bevy::prelude::*;
use bevy_kira_audio::{AudioChannel, AudioControl};

use super::resources::{
    EffectsSoundChannel, EnemySoundChannel, SoundCue, SoundLimiter, WeaponSoundChannel,
};
use crate::game::events::{
    EnemyKilledEvent, ExplosionEvent, PickupCollectedEvent, PlayerLevelUpEvent,
    WaveStateChangedEvent, WeaponFiredEvent,
};

fn play_cue<T: Resource>(
    channel: &AudioChannel<T>,
    asset_server: &AssetServer,
    limiter: &mut SoundLimiter,
    cue: SoundCue,
) {
    if limiter.try_play(cue) {
        channel.play(asset_server.load(cue.path()));
    }
}

pub fn tick_sound_limiter(time: Res<Time>, mut limiter: ResMut<SoundLimiter>) {
    limiter.tick(time.delta());
}

/// Shots and enemy deaths
pub fn play_combat_sounds(
    asset_server: Option<Res<AssetServer>>,
    weapon_channel: Option<Res<AudioChannel<WeaponSoundChannel>>>,
    enemy_channel: Option<Res<AudioChannel<EnemySoundChannel>>>,
    mut limiter: ResMut<SoundLimiter>,
    mut fired: MessageReader<WeaponFiredEvent>,
    mut killed: MessageReader<EnemyKilledEvent>,
) {
    let shots = fired.read().count();
    let kills = killed.read().count();
    let Some(asset_server) = asset_server else {
        return;
    };

    if let Some(channel) = weapon_channel.as_ref() {
        if shots > 0 {
            play_cue(channel, &asset_server, &mut limiter, SoundCue::Shot);
        }
    }
    if let Some(channel) = enemy_channel.as_ref() {
        if kills > 0 {
            play_cue(channel, &asset_server, &mut limiter, SoundCue::EnemyDeath);
        }
    }
}

/// Pickups, level-ups, explosions and wave changes
pub fn play_effect_sounds(
    asset_server: Option<Res<AssetServer>>,
    channel: Option<Res<AudioChannel<EffectsSoundChannel>>>,
    mut limiter: ResMut<SoundLimiter>,
    mut pickups: MessageReader<PickupCollectedEvent>,
    mut level_ups: MessageReader<PlayerLevelUpEvent>,
    mut explosions: MessageReader<ExplosionEvent>,
    mut waves: MessageReader<WaveStateChangedEvent>,
) {
    let cues = [
        (pickups.read().count(), SoundCue::Pickup),
        (level_ups.read().count(), SoundCue::LevelUp),
        (explosions.read().count(), SoundCue::Explosion),
        (waves.read().count(), SoundCue::WaveChange),
    ];
    let (Some(asset_server), Some(channel)) = (asset_server, channel) else {
        return;
    };

    for (count, cue) in cues {
        if count > 0 {
            play_cue(&channel, &asset_server, &mut limiter, cue);
        }
    }
}
