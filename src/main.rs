use lamp_shade::gltf_to_plan::load_plan;
use lamp_shade::{Error, ImportSettings};

fn main() -> Result<(), Error> {
    env_logger::init();
    let args: Vec<String> = std::env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: gltf-lamp-shade <file.gltf|file.glb> [efficacy] [alpha_cutoff]");
        std::process::exit(2);
    };
    let settings = ImportSettings::from_args(&args[2..])?;
    let plan = load_plan(path, &settings)?;

    for light in &plan.lights {
        print!(
            "light {:?} {:?}: strength={:.6} W color=({:.3}, {:.3}, {:.3})",
            light.name,
            light.kind,
            light.strength_watts,
            light.emission_color.x,
            light.emission_color.y,
            light.emission_color.z,
        );
        if let Some(spot) = light.spot {
            print!(" spot_size={:.4} spot_blend={:.4}", spot.size, spot.blend);
        }
        println!();
    }
    if plan.skipped_lights > 0 {
        println!("skipped {} lights", plan.skipped_lights);
    }
    for material in &plan.materials {
        println!(
            "material {:?}: alpha={} cutoff={:?} mix={} color=({:.3}, {:.3}, {:.3}) alpha_factor={:.3} metallic={:.3} roughness={:.3}",
            material.name,
            material.alpha_mode,
            material.alpha_cutoff,
            material.transparent_mix,
            material.color_group.color.x,
            material.color_group.color.y,
            material.color_group.color.z,
            material.color_group.alpha_factor,
            material.metallic_factor,
            material.roughness_factor,
        );
        for texture in &material.textures {
            println!(
                "  {} [{:?}] image={} uv={} filter={:?} wrap={:?}",
                texture.label,
                texture.color_space,
                texture.image_index,
                texture.uv_map,
                texture.sampler.filter,
                texture.sampler.wrap,
            );
        }
        if let Some(strength) = material.normal_strength {
            println!("  normal strength={:.3}", strength);
        }
    }
    Ok(())
}
