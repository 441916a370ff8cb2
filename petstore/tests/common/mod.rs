use petstore::Dog;

lazy_static! {
    pub static ref DOGS: Vec<Dog> = vec![
        Dog::new("Dog").with_color("black").with_breed("Labrador"),
        Dog::new("Dog"),
        Dog::new("Dog").with_breed("Beagle"),
        Dog::new("").with_color("brown"),
        Dog::new("Dog").with_color("Black & Tan <dapple>").with_breed("Dachshund \"Teckel\""),
        Dog::new(" Dog ").with_color("  black ").with_breed(" "),
        Dog::new("Dog").with_color("\tbrindle\n").with_breed(" & "),
    ];
}
