extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;
extern crate unique_owner;

use failure::Error;
use unique_owner::{ Owner, SafeBorrow };

#[derive(Debug, Serialize)]
struct Widget {
    id: i32,
}

impl Widget {
    fn new(id: i32) -> Self {
        info!("constructing widget {}", id);

        Widget { id }
    }
}

impl Drop for Widget {
    fn drop(&mut self) {
        info!("destroying widget {}", self.id);
    }
}

fn sink(owner: Owner<Widget>) {
    let id = owner.borrow_safe(|widget| widget.id);

    info!("sink took ownership of widget {}", id);
}

fn describe(widget: &Widget) -> Result<String, Error> {
    Ok(serde_json::to_string(widget)?)
}

fn main() -> Result<(), Error> {
    env_logger::init();

    let first_owner = Owner::create(Widget::new(1998))?;

    println!("created: {}", describe(&first_owner)?);

    let second_owner = first_owner;

    println!("moved: {}", serde_json::to_string(&second_owner)?);

    let mut slot: Owner<Widget> = Owner::empty();

    slot.move_from(&mut Owner::from(Box::new(Widget::new(2019))));
    println!("slot: {}", describe(slot.get()?)?);

    sink(second_owner);
    sink(slot.take());

    println!("slot after take is {}", slot.state());

    Ok(())
}
